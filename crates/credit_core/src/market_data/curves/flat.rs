//! Constant-rate discount curve.

use super::traits::check_time;
use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Discount curve `Z(t) = exp(-r t)` for a single continuously compounded rate.
///
/// Used for unit tests, benchmarks, and quick what-if runs.
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let discount = FlatCurve::new(0.012_f64);
/// let z = discount.discount_factor(5.05).unwrap();
/// assert!((z - (-0.012_f64 * 5.05).exp()).abs() < 1e-15);
/// assert_eq!(discount.zero_rate(2.0).unwrap(), 0.012);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Curve at `rate`.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// The rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_discount_at_origin() {
        let discount = FlatCurve::new(0.012_f64);
        assert_eq!(discount.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_exponential_decay() {
        let discount = FlatCurve::new(0.03_f64);
        for t in [385.0 / 365.0, 5.05, 28.2, 30.08] {
            assert_relative_eq!(
                discount.discount_factor(t).unwrap(),
                (-0.03_f64 * t).exp(),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_rejects_negative_time() {
        let discount = FlatCurve::new(0.05_f64);
        assert!(matches!(
            discount.discount_factor(-0.25),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_zero_rate_is_the_rate() {
        let discount = FlatCurve::new(0.04_f64);
        assert_eq!(discount.zero_rate(0.25).unwrap(), discount.rate());
        assert!(discount.zero_rate(0.0).is_err());
    }

    #[test]
    fn test_single_precision() {
        let discount = FlatCurve::new(0.02_f32);
        let z = discount.discount_factor(2.0_f32).unwrap();
        assert!((z - (-0.04_f32).exp()).abs() < 1e-6);
    }
}
