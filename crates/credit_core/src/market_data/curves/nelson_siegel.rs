//! Nelson-Siegel zero curve.

use super::traits::check_time;
use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Closed-form Nelson-Siegel zero curve.
///
/// # Mathematical Model
///
/// ```text
/// x    = t / tau
/// L1   = (1 - e^{-x}) / x
/// z(t) = b0 + b1 * L1 + b2 * (L1 - e^{-x})
/// Z(t) = exp(-z(t) * t)
/// ```
///
/// with the limit `z(0) = b0 + b1`.
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{NelsonSiegelCurve, YieldCurve};
///
/// let curve = NelsonSiegelCurve::new(0.0408_f64, -0.0396, -0.0511, 1.614).unwrap();
/// assert!((curve.zero_rate_at(0.0) - 0.0012).abs() < 1e-12);
/// assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegelCurve<T: Float> {
    b0: T,
    b1: T,
    b2: T,
    tau: T,
}

impl<T: Float> NelsonSiegelCurve<T> {
    /// Construct the curve from `(b0, b1, b2, tau)`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any parameter is non-finite or `tau <= 0`.
    pub fn new(b0: T, b1: T, b2: T, tau: T) -> Result<Self, MarketDataError> {
        for (name, value) in [("b0", b0), ("b1", b1), ("b2", b2), ("tau", tau)] {
            if !value.is_finite() {
                return Err(MarketDataError::InvalidParameter {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if tau <= T::zero() {
            return Err(MarketDataError::InvalidParameter {
                name: "tau",
                value: tau.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { b0, b1, b2, tau })
    }

    /// Construct from a `[b0, b1, b2, tau]` array.
    pub fn from_params(params: [T; 4]) -> Result<Self, MarketDataError> {
        let [b0, b1, b2, tau] = params;
        Self::new(b0, b1, b2, tau)
    }

    /// Parameters as `[b0, b1, b2, tau]`.
    #[inline]
    pub fn params(&self) -> [T; 4] {
        [self.b0, self.b1, self.b2, self.tau]
    }

    /// Continuously compounded zero rate, defined for every `t >= 0`.
    pub fn zero_rate_at(&self, t: T) -> T {
        if t <= T::zero() {
            return self.b0 + self.b1;
        }
        let x = t / self.tau;
        let decay = (-x).exp();
        // exp_m1 keeps the loading accurate as x -> 0
        let loading = -(-x).exp_m1() / x;
        self.b0 + self.b1 * loading + self.b2 * (loading - decay)
    }
}

impl<T: Float> YieldCurve<T> for NelsonSiegelCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok((-self.zero_rate_at(t) * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        Ok(self.zero_rate_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> NelsonSiegelCurve<f64> {
        NelsonSiegelCurve::new(0.0408, -0.0396, -0.0511, 1.614).unwrap()
    }

    #[test]
    fn test_short_end_limit() {
        let curve = reference();
        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.0012, epsilon = 1e-15);
        // the formula converges smoothly to the limit
        assert_relative_eq!(curve.zero_rate(1e-9).unwrap(), 0.0012, epsilon = 1e-9);
    }

    #[test]
    fn test_short_end_has_no_cancellation() {
        let curve = reference();
        // z(t) ~ b0 + b1 + (b2 - b1) x / 2 for small x = t / tau
        for &t in &[1e-12, 1e-10, 1e-8, 1e-6] {
            let x = t / 1.614;
            let expected = 0.0012 + (-0.0511 + 0.0396) * x / 2.0;
            assert_relative_eq!(curve.zero_rate(t).unwrap(), expected, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_long_end_tends_to_b0() {
        let curve = reference();
        assert_relative_eq!(curve.zero_rate(500.0).unwrap(), 0.0408, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_rate_matches_formula() {
        let curve = reference();
        let t = 5.0_f64;
        let x = t / 1.614;
        let l1 = (1.0 - (-x).exp()) / x;
        let expected = 0.0408 - 0.0396 * l1 - 0.0511 * (l1 - (-x).exp());
        assert_relative_eq!(curve.zero_rate(t).unwrap(), expected, epsilon = 1e-15);
        assert_relative_eq!(
            curve.discount_factor(t).unwrap(),
            (-expected * t).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_discount_factors_decrease() {
        let curve = reference();
        let mut prev = 1.0;
        for i in 1..=120 {
            let df = curve.discount_factor(i as f64 * 0.25).unwrap();
            assert!(df < prev && df > 0.0);
            prev = df;
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            NelsonSiegelCurve::new(0.04_f64, -0.04, -0.05, 0.0),
            Err(MarketDataError::InvalidParameter { name: "tau", .. })
        ));
        assert!(matches!(
            NelsonSiegelCurve::new(f64::NAN, -0.04, -0.05, 1.0),
            Err(MarketDataError::InvalidParameter { name: "b0", .. })
        ));
        assert!(reference().discount_factor(-1.0).is_err());
    }

    #[test]
    fn test_from_params_round_trip() {
        let curve = NelsonSiegelCurve::from_params([0.0408, -0.0396, -0.0511, 1.614]).unwrap();
        assert_eq!(curve, reference());
        assert_eq!(curve.params(), [0.0408, -0.0396, -0.0511, 1.614]);
    }
}
