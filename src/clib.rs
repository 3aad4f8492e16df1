use crate::distribution::{InvalidParameter, NormalDistribution};
use crate::erf::standard_quantile;

#[repr(C)]
pub struct FFiStr {
    str_len: usize,
    str_ptr: *const u8,
}

impl From<&'static str> for FFiStr {
    fn from(s: &'static str) -> Self {
        Self {
            str_len: s.len(),
            str_ptr: s.as_ptr(),
        }
    }
}

#[repr(C)]
pub struct FfiResult {
    succeeded: bool,
    err_str: FFiStr,
}

impl From<Result<(), InvalidParameter>> for FfiResult {
    fn from(r: Result<(), InvalidParameter>) -> Self {
        match r {
            Err(e) => Self {
                succeeded: false,
                err_str: <&'static str>::from(e).into(),
            },
            Ok(()) => Self {
                succeeded: true,
                err_str: FFiStr {
                    str_len: 0,
                    str_ptr: core::ptr::null(),
                },
            },
        }
    }
}

macro_rules! gen_capi {
    (@inner $fty:ident) => {
        paste::paste! {
            /// # Safety
            /// `out` must be valid for a write of one `NormalDistribution`.
            /// It is only written on success.
            #[no_mangle]
            pub unsafe extern "C" fn [<probit_normal_new_ $fty>] (
                mean: $fty,
                stddev: $fty,
                out: *mut NormalDistribution<$fty>,
            ) -> FfiResult {
                NormalDistribution::new(mean, stddev)
                    .map(|d| out.write(d))
                    .into()
            }

            #[no_mangle]
            pub extern "C" fn [<probit_quantile_ $fty>] (
                dist: &NormalDistribution<$fty>,
                p: $fty,
            ) -> $fty {
                dist.quantile(p)
            }

            /// # Safety
            /// `inputs` and `outputs` must each point to `len` valid elements
            /// and must not overlap.
            #[no_mangle]
            pub unsafe extern "C" fn [<probit_quantile_batch_ $fty>] (
                dist: &NormalDistribution<$fty>,
                inputs: *const $fty,
                outputs: *mut $fty,
                len: usize,
            ) {
                if len == 0 {
                    return;
                }
                let inputs = core::slice::from_raw_parts(inputs, len);
                let outputs = core::slice::from_raw_parts_mut(outputs, len);
                dist.quantile_batch(inputs, outputs)
            }

            #[no_mangle]
            pub extern "C" fn [<probit_standard_quantile_ $fty>] (p: $fty) -> $fty {
                standard_quantile(p)
            }
        }
    };
    ($($fty:ident),*) => {
        $( gen_capi!(@inner $fty); )*
    };
}

gen_capi!(f32, f64);
