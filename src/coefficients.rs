#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
//! Rational approximation tables for the standard normal quantile.
//!
//! Both tables are weighted least-squares fits of `z = Φ⁻¹(p)` in the
//! linearized form `N(x) - z D(x) = 0`, with every denominator normalized so
//! that its constant term is exactly one. Coefficients are stored in
//! ascending powers.
//!
//! * central: `x = (p - 1/2)²` and `z = (p - 1/2) N(x) / D(x)` on
//!   `[P_LOW, P_HIGH]`
//! * tail: `x = sqrt(-2 ln m)`, `m = min(p, 1 - p)` and
//!   `z = sign(p - 1/2) N(x) / D(x)`, fitted for `m` in `[1e-320, P_LOW]`
//!
//! The central table is good to about 1.4e-5 absolute, the tail table to about
//! 1.5e-9 relative.

use crate::utils::{polynomial, FloatExt};

/// Lower edge of the central region, approximately Φ(-2).
pub const P_LOW: f64 = 0.02425;
/// Upper edge of the central region.
pub const P_HIGH: f64 = 1.0 - P_LOW;
/// Below `TAIL_SWITCH` (or above `1 - TAIL_SWITCH`) the refinement residual is
/// taken in log space.
pub const TAIL_SWITCH: f64 = 1e-8;

/// A fixed-degree rational function `N(x) / D(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalTable<const M: usize, const N: usize> {
    pub numerator: [f64; M],
    pub denominator: [f64; N],
}

impl<const M: usize, const N: usize> RationalTable<M, N> {
    pub fn eval<F: FloatExt>(&self, x: F) -> F {
        polynomial(x, &self.numerator) / polynomial(x, &self.denominator)
    }

    pub const fn numerator_degree(&self) -> usize {
        M - 1
    }

    pub const fn denominator_degree(&self) -> usize {
        N - 1
    }
}

pub const CENTRAL: RationalTable<7, 7> = RationalTable {
    numerator: [
        2.5066328439214587,
        -14.22623761037946,
        14.45851955419695,
        11.241391154662209,
        6.2265163453095385,
        5.352849973021133,
        1.5469110470244314,
    ],
    denominator: [
        1.0,
        -6.722452589809259,
        10.499905283670435,
        2.7581133551227297,
        -1.2377379417443555,
        -4.074155664710034,
        0.9542120305893468,
    ],
};

pub const TAIL: RationalTable<9, 9> = RationalTable {
    numerator: [
        -2.6973529858292644,
        -0.9452088650189386,
        1.6159503698954043,
        -0.17195541479934615,
        0.3959839436239758,
        0.4032569650501892,
        0.06433987074480846,
        0.0027472073905037784,
        2.7657865246717956e-05,
    ],
    denominator: [
        1.0,
        2.12803871760045,
        0.7199925768537688,
        0.61808049393025,
        0.4162620054360096,
        0.06451825065434796,
        0.002747344221864223,
        2.7657548936286583e-05,
        5.377926747527356e-13,
    ],
};
