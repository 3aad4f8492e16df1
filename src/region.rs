use crate::coefficients::{P_HIGH, P_LOW};
use crate::utils::FloatExt;

/// Where a probability falls relative to the approximation regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `p <= 0`, the quantile is `-inf`
    Zero,
    /// `0 < p < P_LOW`
    LeftTail,
    /// `P_LOW <= p <= P_HIGH`
    Central,
    /// `P_HIGH < p < 1`
    RightTail,
    /// `p >= 1`, the quantile is `+inf`
    One,
}

impl Region {
    /// NaN compares false against every bound and lands in `Central`, so it
    /// propagates through the approximation unchanged.
    pub fn classify<F: FloatExt>(p: F) -> Self {
        if p <= F::ZERO {
            Region::Zero
        } else if p >= F::ONE {
            Region::One
        } else if p < F::lossy_from(P_LOW) {
            Region::LeftTail
        } else if p > F::lossy_from(P_HIGH) {
            Region::RightTail
        } else {
            Region::Central
        }
    }
}
