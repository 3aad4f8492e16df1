use crate::erf::{normcdf, normpdf, standard_quantile};
use crate::utils::FloatExt;

pub trait Distribution {
    type Item;
    fn inverse_cdf(&self, p: Self::Item) -> Self::Item;
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidParameter {
    #[display(fmt = "standard deviation must be finite and greater than zero")]
    Stddev,
    #[display(fmt = "mean must be finite")]
    Mean,
}

impl From<InvalidParameter> for &'static str {
    fn from(e: InvalidParameter) -> Self {
        match e {
            InvalidParameter::Stddev => "InvalidParameter: stddev",
            InvalidParameter::Mean => "InvalidParameter: mean",
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidParameter {}

/// Normal distribution with a validated `mean` and `stddev`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDistribution<F> {
    mean: F,
    stddev: F,
}

impl<F: FloatExt> NormalDistribution<F> {
    pub const STANDARD: Self = Self {
        mean: F::ZERO,
        stddev: F::ONE,
    };

    pub fn new(mean: F, stddev: F) -> Result<Self, InvalidParameter> {
        // also rejects NaN
        if !(stddev > F::ZERO && stddev.is_finite()) {
            return Err(InvalidParameter::Stddev);
        }
        if !mean.is_finite() {
            return Err(InvalidParameter::Mean);
        }
        Ok(Self { mean, stddev })
    }

    pub fn mean(&self) -> F {
        self.mean
    }

    pub fn stddev(&self) -> F {
        self.stddev
    }

    pub fn cdf(&self, x: F) -> F {
        normcdf((x - self.mean) / self.stddev)
    }

    pub fn pdf(&self, x: F) -> F {
        normpdf((x - self.mean) / self.stddev) / self.stddev
    }

    /// `mean + stddev * Φ⁻¹(p)`, with the same handling of `p` outside `(0, 1)`
    /// as [`standard_quantile`]
    pub fn quantile(&self, p: F) -> F {
        self.mean + self.stddev * standard_quantile(p)
    }

    /// Writes `quantile(inputs[i])` into `outputs[i]`. Entries of `outputs`
    /// past `inputs.len()` are left untouched.
    ///
    /// # Panics
    /// If `outputs` is shorter than `inputs`.
    #[track_caller]
    pub fn quantile_batch(&self, inputs: &[F], outputs: &mut [F]) {
        assert!(
            outputs.len() >= inputs.len(),
            "quantile_batch: {} outputs for {} inputs",
            outputs.len(),
            inputs.len()
        );
        inputs
            .iter()
            .zip(outputs.iter_mut())
            .for_each(|(&p, out)| *out = self.quantile(p));
    }
}

impl<F: FloatExt> Default for NormalDistribution<F> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<F: FloatExt> Distribution for NormalDistribution<F> {
    type Item = F;

    fn inverse_cdf(&self, p: Self::Item) -> Self::Item {
        self.quantile(p)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    #[test]
    fn test_new() {
        let d = NormalDistribution::new(1f64, 2.0).unwrap();
        assert_eq!(d.mean(), 1.0);
        assert_eq!(d.stddev(), 2.0);
        assert_eq!(
            NormalDistribution::new(0f64, 0.0),
            Err(InvalidParameter::Stddev)
        );
        assert_eq!(
            NormalDistribution::new(0f64, -1.0),
            Err(InvalidParameter::Stddev)
        );
        assert_eq!(
            NormalDistribution::new(0f64, f64::NAN),
            Err(InvalidParameter::Stddev)
        );
        assert_eq!(
            NormalDistribution::new(0f64, f64::INFINITY),
            Err(InvalidParameter::Stddev)
        );
        assert_eq!(
            NormalDistribution::new(f64::NAN, 1.0),
            Err(InvalidParameter::Mean)
        );
        assert_eq!(
            NormalDistribution::new(f32::NEG_INFINITY, 1.0),
            Err(InvalidParameter::Mean)
        );
        assert_eq!(NormalDistribution::<f64>::default(), NormalDistribution::STANDARD);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            format!("{}", InvalidParameter::Stddev),
            "standard deviation must be finite and greater than zero"
        );
        assert_eq!(format!("{}", InvalidParameter::Mean), "mean must be finite");
        let s: &'static str = InvalidParameter::Stddev.into();
        assert_eq!(s, "InvalidParameter: stddev");
    }

    #[test]
    fn test_quantile_shift_scale() {
        let d = NormalDistribution::new(100f64, 15.0).unwrap();
        let n = Normal::new(100.0, 15.0).unwrap();
        assert_eq!(d.quantile(0.5), 100.0);
        for &p in &[1e-20, 1e-6, 0.1, 0.3, 0.7, 0.9, 1.0 - 1e-6] {
            assert_float_eq!(d.quantile(p), n.inverse_cdf(p), rmax <= 1e-12, "p = {:e}", p);
        }
        assert_float_eq!(
            d.quantile(0.95),
            100.0 + 15.0 * 1.6448536269514722,
            abs <= 1e-11
        );
        assert_eq!(d.quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(d.quantile(1.0), f64::INFINITY);
        assert_eq!(d.inverse_cdf(0.95), d.quantile(0.95));
    }

    #[test]
    fn test_cdf_pdf() {
        let d = NormalDistribution::new(-2f64, 3.0).unwrap();
        let n = Normal::new(-2.0, 3.0).unwrap();
        // x = -20, -5, -2, 4 standardize exactly to z = -6, -1, 0, 2
        for &(x, cdf, pdf) in &[
            (-20.0, 9.86587645037698e-10, 2.0252942832744286e-09),
            (-5.0, 0.15865525393145705, 0.08065690817304778),
            (-2.0, 0.5, 0.13298076013381088),
            (4.0, 0.9772498680518208, 0.01799698883772935),
        ] {
            assert_float_eq!(d.cdf(x), cdf, rmax <= 1e-12, "x = {}", x);
            assert_float_eq!(d.pdf(x), pdf, rmax <= 1e-13, "x = {}", x);
        }
        for &x in &[-20.0, -5.0, -2.0, 0.0, 4.0, 10.0] {
            assert_float_eq!(d.cdf(x), n.cdf(x), rmax <= 1e-9, "x = {}", x);
            assert_float_eq!(d.pdf(x), n.pdf(x), rmax <= 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn test_quantile_batch() {
        let d = NormalDistribution::new(3f64, 0.5).unwrap();
        let inputs = [0.001, 0.5, 0.999];
        let mut outputs = [0f64; 3];
        d.quantile_batch(&inputs, &mut outputs);
        for (&p, &z) in inputs.iter().zip(&outputs) {
            assert_eq!(z.to_bits(), d.quantile(p).to_bits());
        }

        let mut longer = [7f64; 5];
        d.quantile_batch(&inputs, &mut longer);
        assert_eq!(&longer[..3], &outputs[..]);
        assert_eq!(&longer[3..], &[7.0, 7.0]);

        let mut empty: [f64; 0] = [];
        d.quantile_batch(&[], &mut empty);
    }

    #[test]
    fn test_standard_batch_matches_standard_quantile() {
        let d = NormalDistribution::<f64>::STANDARD;
        let inputs = [0.001, 0.5, 0.999];
        let mut outputs = [0f64; 3];
        d.quantile_batch(&inputs, &mut outputs);
        for (&p, &z) in inputs.iter().zip(&outputs) {
            assert_eq!(z.to_bits(), standard_quantile(p).to_bits(), "p = {}", p);
        }
        assert_eq!(outputs[1], 0.0);
        assert!(outputs[0] < 0.0 && outputs[2] > 0.0);
    }

    #[test]
    #[should_panic(expected = "quantile_batch")]
    fn test_quantile_batch_short_output() {
        let d = NormalDistribution::<f64>::STANDARD;
        let mut outputs = [0f64; 1];
        d.quantile_batch(&[0.1, 0.2], &mut outputs);
    }

    #[test]
    fn test_quantile_batch_across_threads() {
        let d = NormalDistribution::new(0f64, 2.0).unwrap();
        let inputs = (1..10_000).map(|i| f64::from(i) / 10_000.0).collect::<Vec<_>>();
        let mut outputs = vec![0f64; inputs.len()];
        std::thread::scope(|s| {
            for (i, o) in inputs.chunks(1000).zip(outputs.chunks_mut(1000)) {
                s.spawn(move || d.quantile_batch(i, o));
            }
        });
        for (&p, &z) in inputs.iter().zip(&outputs) {
            assert_eq!(z.to_bits(), d.quantile(p).to_bits());
        }
    }
}
