use crate::coefficients::TAIL_SWITCH;
use crate::erf::{normccdf, normcdf, normpdf};
use crate::utils::FloatExt;

/// Fixed number of Halley steps; with cubic convergence two steps take a
/// 1e-5 seed below double precision rounding.
pub const ITERATIONS: usize = 2;

/// `(Φ(z) - p) / φ(z)`, evaluated so that the difference of two nearly
/// equal probabilities never cancels.
pub fn residual<F: FloatExt>(p: F, z: F) -> F {
    let switch = F::lossy_from(TAIL_SWITCH);
    let q = F::ONE - p;
    let diff = if p < switch {
        // Φ(z) - p = p (exp(ln Φ(z) - ln p) - 1)
        p * (normcdf(z).ln() - p.ln()).exp_m1()
    } else if q < switch {
        // Φ(z) - p = -(Q(z) - (1 - p))
        -(q * (normccdf(z).ln() - q.ln()).exp_m1())
    } else if p <= F::lossy_from(0.5f64) {
        normcdf(z) - p
    } else {
        // 1 - p is exact here, Q(z) carries full relative precision
        q - normccdf(z)
    };
    diff / normpdf(z)
}

/// One Halley step for `f(z) = Φ(z) - p`, using `f' = φ` and `f'' = -z φ`.
pub fn halley_step<F: FloatExt>(p: F, z: F) -> F {
    let r = residual(p, z);
    z - r / (F::ONE + F::lossy_from(0.5f64) * z * r)
}

/// Polishes a seed `z0` for `p` strictly inside `(0, 1)`.
pub fn refine<F: FloatExt>(p: F, z0: F) -> F {
    (0..ITERATIONS).fold(z0, |z, _| halley_step(p, z))
}
