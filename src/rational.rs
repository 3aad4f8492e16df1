use crate::coefficients::{CENTRAL, TAIL};
use crate::region::Region;
use crate::utils::FloatExt;

/// Rational seed `z₀ ≈ Φ⁻¹(p)` for a probability already classified into
/// `region`. Within about 1.4e-5 of the true quantile in the central region
/// and about 1.5e-9 relative in the tails; only good enough to start the
/// refinement.
pub fn initial_estimate<F: FloatExt>(p: F, region: Region) -> F {
    let half = F::lossy_from(0.5f64);
    match region {
        Region::Zero => F::neg_infinity(),
        Region::One => F::infinity(),
        Region::Central => {
            // odd in u by construction
            let u = p - half;
            u * CENTRAL.eval(u.sqr())
        }
        Region::LeftTail | Region::RightTail => {
            let m = if region == Region::LeftTail {
                p
            } else {
                F::ONE - p
            };
            let t = (F::lossy_from(-2f64) * m.ln()).sqrt();
            TAIL.eval(t).copy_sign(p - half)
        }
    }
}
