//! Calibration instruments.

use super::error::BootstrapError;
use credit_core::market_data::curves::YieldCurve;
use credit_models::instruments::credit::{CdsTerms, StandardCds};
use credit_models::schedules::{CouponSchedule, PaymentSchedule};
use num_traits::Float;

/// A quoted standard CDS used to pin one knot of the hazard curve.
///
/// The quote's maturity becomes a knot; its spread is the par spread the
/// bootstrapped curve must reproduce.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::schedules::PaymentSchedule;
/// use credit_optimiser::bootstrapping::CdsQuote;
///
/// let discount = FlatCurve::new(0.01_f64);
/// let schedule = PaymentSchedule::new(vec![0.0, 0.5, 1.0], vec![0.5, 0.5], &discount).unwrap();
/// let quote = CdsQuote::new(1.0, 0.0103, 0.45, schedule).unwrap();
/// assert_eq!(quote.maturity(), 1.0);
/// assert!(CdsQuote::new(1.0, 0.0103, 1.2, quote.schedule().clone()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CdsQuote<T: Float> {
    maturity: T,
    spread: T,
    recovery: T,
    schedule: PaymentSchedule<T>,
}

impl<T: Float> CdsQuote<T> {
    /// Create a quote.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the maturity is not positive, the spread is
    /// negative or non-finite, or the recovery lies outside `[0, 1]`.
    pub fn new(
        maturity: T,
        spread: T,
        recovery: T,
        schedule: PaymentSchedule<T>,
    ) -> Result<Self, BootstrapError> {
        if !maturity.is_finite() || maturity <= T::zero() {
            return Err(BootstrapError::invalid_input(format!(
                "quote maturity {} must be positive and finite",
                maturity.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !spread.is_finite() || spread < T::zero() {
            return Err(BootstrapError::invalid_input(format!(
                "quote spread {} must be non-negative and finite",
                spread.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !(recovery >= T::zero() && recovery <= T::one()) {
            return Err(BootstrapError::invalid_input(format!(
                "recovery rate {} outside [0, 1]",
                recovery.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            maturity,
            spread,
            recovery,
            schedule,
        })
    }

    /// Quote a dated coupon schedule, taking the maturity from its last
    /// payment time.
    pub fn from_coupons<D: YieldCurve<T>>(
        coupons: &CouponSchedule,
        spread: T,
        recovery: T,
        discount: &D,
    ) -> Result<Self, BootstrapError> {
        let schedule = coupons
            .payment_schedule(discount)
            .map_err(|e| BootstrapError::invalid_input(e.to_string()))?;
        let maturity = schedule.maturity();
        Self::new(maturity, spread, recovery, schedule)
    }

    /// Maturity in years; becomes a knot.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Par spread as a decimal.
    #[inline]
    pub fn spread(&self) -> T {
        self.spread
    }

    /// Recovery rate.
    #[inline]
    pub fn recovery(&self) -> T {
        self.recovery
    }

    /// Numeric payment schedule.
    #[inline]
    pub fn schedule(&self) -> &PaymentSchedule<T> {
        &self.schedule
    }

    /// The standard contract for knot `knot` (1-based).
    pub fn to_standard(&self, knot: usize) -> Result<StandardCds<T>, BootstrapError> {
        let terms = CdsTerms::new(self.spread, self.recovery, self.schedule.clone())?;
        Ok(StandardCds::new(terms, knot)?)
    }
}
