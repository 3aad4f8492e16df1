#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::excessive_precision)]
#[macro_use]
extern crate derive_more;

#[cfg(feature = "capi")]
mod clib;
mod coefficients;
mod distribution;
mod erf;
mod halley;
mod rational;
mod region;
mod utils;

#[cfg(feature = "capi")]
pub use crate::clib::{FFiStr, FfiResult};
pub use crate::coefficients::{RationalTable, CENTRAL, P_HIGH, P_LOW, TAIL, TAIL_SWITCH};
pub use crate::distribution::{Distribution, InvalidParameter, NormalDistribution};
pub use crate::erf::{normccdf, normcdf, normpdf, standard_quantile};
pub use crate::halley::{halley_step, refine, residual, ITERATIONS};
pub use crate::rational::initial_estimate;
pub use crate::region::Region;
pub use crate::utils::{
    polynomial, ConstOne, ConstZero, Float, FloatExt, LossyFrom, LossyInto, NumAssign, One, Zero,
};
