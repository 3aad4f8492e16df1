use crate::halley::refine;
use crate::rational::initial_estimate;
use crate::region::Region;
use crate::utils::FloatExt;

const FRAC_1_SQRT_2PI: f64 = 0.398942280401432677939946059934381868;

/// Standard Normal CDF `Φ(z)`
pub fn normcdf<F: FloatExt>(z: F) -> F {
    F::lossy_from(0.5f64) * (-z * F::lossy_from(core::f64::consts::FRAC_1_SQRT_2)).erfc()
}

/// Standard Normal survival function `Q(z) = 1 - Φ(z)`, without the
/// cancellation for large `z`
pub fn normccdf<F: FloatExt>(z: F) -> F {
    F::lossy_from(0.5f64) * (z * F::lossy_from(core::f64::consts::FRAC_1_SQRT_2)).erfc()
}

/// Standard Normal PDF `φ(z)`
pub fn normpdf<F: FloatExt>(z: F) -> F {
    F::lossy_from(FRAC_1_SQRT_2PI) * (F::lossy_from(-0.5f64) * z.sqr()).exp()
}

/// Standard Normal inverse CDF
/// To transform into a normal distribution with stddev=a and mean=b
/// x = b + a * standard_quantile(p)
///
/// `p <= 0` maps to `-inf`, `p >= 1` to `+inf`, NaN stays NaN.
/// Otherwise the result is within a few ulp of the true quantile, down to
/// the smallest subnormal probability.
pub fn standard_quantile<F: FloatExt>(p: F) -> F {
    let region = Region::classify(p);
    let z0 = initial_estimate(p, region);
    match region {
        Region::Zero | Region::One => z0,
        Region::LeftTail | Region::Central | Region::RightTail => refine(p, z0),
    }
}
