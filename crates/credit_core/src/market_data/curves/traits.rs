//! Discount curve abstraction.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic discount curve trait.
///
/// The CDS engine treats the term structure as an opaque, deterministic
/// function `t -> Z(t)`; implementations only need `discount_factor`.
///
/// # Invariants
///
/// - Z(0) = 1
/// - Z(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{NelsonSiegelCurve, YieldCurve};
///
/// let discount = NelsonSiegelCurve::new(0.0408_f64, -0.0396, -0.0511, 1.614).unwrap();
/// assert_eq!(discount.discount_factor(0.0).unwrap(), 1.0);
///
/// let z5 = discount.discount_factor(5.0).unwrap();
/// let z10 = discount.discount_factor(10.0).unwrap();
/// assert!(z10 < z5 && z5 < 1.0);
/// assert!(discount.forward_rate(5.0, 10.0).unwrap() > 0.0);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for time `t` (years from the trade date).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0` or `t` is not finite.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for time `t > 0`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(Z(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(-self.discount_factor(t)?.ln() / t)
    }

    /// Continuously compounded forward rate over `(t1, t2]`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// f(t1, t2) = -ln(Z(t2) / Z(t1)) / (t2 - t1)
    /// ```
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t2.to_f64().unwrap_or(f64::NAN),
            });
        }
        let ratio = self.discount_factor(t2)? / self.discount_factor(t1)?;
        Ok(-ratio.ln() / dt)
    }
}

/// Reject negative or non-finite query times.
pub(crate) fn check_time<T: Float>(t: T) -> Result<(), MarketDataError> {
    if t < T::zero() || !t.is_finite() {
        return Err(MarketDataError::InvalidMaturity {
            t: t.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
