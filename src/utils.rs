pub use num_traits::{Float, NumAssign, One, Zero};

pub trait LossyFrom<T>: Sized {
    fn lossy_from(_: T) -> Self;
}

pub trait LossyInto<T>: Sized {
    fn lossy_into(self) -> T;
}

impl<T, U: LossyFrom<T>> LossyInto<U> for T {
    fn lossy_into(self) -> U {
        LossyFrom::lossy_from(self)
    }
}

macro_rules! primative_lossy_conv {
    ( $($t:ty),+ ) => {
        primative_lossy_conv! { { $($t),+ } => { $($t),+ } }
    };
    ( { $($from:ty),+ } => $right:tt ) => {
        $( primative_lossy_conv! { $from => $right } )+
    };
    ( $from:ty => { $($to:ty),+ } ) => {
        $( primative_lossy_conv! { $from => $to } )+
    };
    ( $from:ty => $to:ty ) => {
        impl LossyFrom<$from> for $to {
            fn lossy_from(v: $from) -> Self {
                v as $to
            }
        }
    };
}

primative_lossy_conv! { f32, f64 }

pub trait ConstZero {
    const ZERO: Self;
}

pub trait ConstOne {
    const ONE: Self;
}

/// Float surface shared by the `f32` and `f64` kernels.
///
/// Everything transcendental goes through `num_traits::Float` (backed by
/// `libm` without `std`); the pieces `Float` lacks live here.
pub trait FloatExt:
    'static
    + Float
    + NumAssign
    + LossyFrom<f32>
    + LossyInto<f32>
    + LossyFrom<f64>
    + LossyInto<f64>
    + core::fmt::Debug
    + core::fmt::Display
    + core::fmt::LowerExp
    + ConstZero
    + ConstOne
    + Send
    + Sync
{
    fn copy_sign(self, other: Self) -> Self;
    /// Complementary error function, accurate in relative terms far into the
    /// upper tail where `1 - erf(x)` would round to zero.
    fn erfc(self) -> Self;
    fn sqr(self) -> Self {
        self * self
    }
}

impl ConstZero for f32 {
    const ZERO: Self = 0f32;
}

impl ConstOne for f32 {
    const ONE: Self = 1f32;
}

impl FloatExt for f32 {
    fn copy_sign(self, other: Self) -> Self {
        libm::copysignf(self, other)
    }

    fn erfc(self) -> Self {
        libm::erfcf(self)
    }
}

impl ConstZero for f64 {
    const ZERO: Self = 0f64;
}

impl ConstOne for f64 {
    const ONE: Self = 1f64;
}

impl FloatExt for f64 {
    fn copy_sign(self, other: Self) -> Self {
        libm::copysign(self, other)
    }

    fn erfc(self) -> Self {
        libm::erfc(self)
    }
}

/// Horner evaluation of `coeff[0] + coeff[1] z + ... + coeff[N - 1] z^(N - 1)`,
/// starting from the highest degree term.
pub fn polynomial<F: FloatExt, const N: usize>(z: F, coeff: &[f64; N]) -> F {
    coeff
        .iter()
        .rev()
        .fold(F::ZERO, |s, &c| s.mul_add(z, F::lossy_from(c)))
}
