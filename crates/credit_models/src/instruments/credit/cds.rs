//! CDS contract definitions.

use crate::schedules::PaymentSchedule;
use credit_core::types::PricingError;
use num_traits::Float;

/// Economic terms shared by every CDS contract.
///
/// Amounts produced from these terms are per unit notional; `notional` is
/// carried so callers can scale results with
/// [`CdsValuation::scale`](super::CdsValuation::scale).
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::instruments::credit::CdsTerms;
/// use credit_models::schedules::PaymentSchedule;
///
/// let schedule = PaymentSchedule::new(vec![0.0, 0.5, 1.0], vec![0.5, 0.5], &FlatCurve::new(0.0_f64)).unwrap();
/// let terms = CdsTerms::new(0.017, 0.6, schedule).unwrap().with_notional(1.0e8);
///
/// assert_eq!(terms.maturity(), 1.0);
/// assert!((terms.loss_given_default() - 0.4).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CdsTerms<T: Float> {
    spread: T,
    recovery: T,
    schedule: PaymentSchedule<T>,
    notional: T,
}

impl<T: Float> CdsTerms<T> {
    /// Create terms with unit notional.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` when the spread is negative or
    /// non-finite, or the recovery rate lies outside `[0, 1]`.
    pub fn new(spread: T, recovery: T, schedule: PaymentSchedule<T>) -> Result<Self, PricingError> {
        validate_spread(spread)?;
        if !(recovery >= T::zero() && recovery <= T::one()) {
            return Err(PricingError::InvalidInput(format!(
                "recovery rate {} outside [0, 1]",
                recovery.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            spread,
            recovery,
            schedule,
            notional: T::one(),
        })
    }

    /// Set the notional (face value).
    pub fn with_notional(mut self, notional: T) -> Self {
        self.notional = notional;
        self
    }

    /// Replace the running spread.
    pub fn with_spread(mut self, spread: T) -> Result<Self, PricingError> {
        validate_spread(spread)?;
        self.spread = spread;
        Ok(self)
    }

    /// Maturity, the time of the final payment.
    #[inline]
    pub fn maturity(&self) -> T {
        self.schedule.maturity()
    }

    /// Running spread as a decimal (0.017 = 170bp).
    #[inline]
    pub fn spread(&self) -> T {
        self.spread
    }

    /// Recovery rate R.
    #[inline]
    pub fn recovery(&self) -> T {
        self.recovery
    }

    /// Loss given default, 1 - R.
    #[inline]
    pub fn loss_given_default(&self) -> T {
        T::one() - self.recovery
    }

    /// Payment schedule.
    #[inline]
    pub fn schedule(&self) -> &PaymentSchedule<T> {
        &self.schedule
    }

    /// Notional (face value).
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }
}

fn validate_spread<T: Float>(spread: T) -> Result<(), PricingError> {
    if !spread.is_finite() || spread < T::zero() {
        return Err(PricingError::InvalidInput(format!(
            "spread {} must be finite and non-negative",
            spread.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}

/// Calibration instrument maturing on knot `m` of the hazard curve.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardCds<T: Float> {
    terms: CdsTerms<T>,
    knot: usize,
}

impl<T: Float> StandardCds<T> {
    /// Create a standard contract for the 1-based knot index `knot`.
    pub fn new(terms: CdsTerms<T>, knot: usize) -> Result<Self, PricingError> {
        if knot == 0 {
            return Err(PricingError::InvalidInput(
                "standard contract knot index is 1-based".to_string(),
            ));
        }
        Ok(Self { terms, knot })
    }

    /// Contract terms.
    #[inline]
    pub fn terms(&self) -> &CdsTerms<T> {
        &self.terms
    }

    /// 1-based knot index m.
    #[inline]
    pub fn knot(&self) -> usize {
        self.knot
    }

    /// Hazard segment solved by this contract, `m - 1`.
    #[inline]
    pub fn segment(&self) -> usize {
        self.knot - 1
    }
}

/// Arbitrary contract valued after calibration.
///
/// `previous_accrual` is the accrual fraction from the previous coupon date
/// to the trade date; it drives the first-coupon stub and the accrued amount.
#[derive(Debug, Clone, PartialEq)]
pub struct NonStandardCds<T: Float> {
    terms: CdsTerms<T>,
    previous_accrual: T,
}

impl<T: Float> NonStandardCds<T> {
    /// Create a non-standard contract.
    pub fn new(terms: CdsTerms<T>, previous_accrual: T) -> Result<Self, PricingError> {
        if !previous_accrual.is_finite() || previous_accrual < T::zero() {
            return Err(PricingError::InvalidInput(format!(
                "previous payment accrual {} must be finite and non-negative",
                previous_accrual.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            terms,
            previous_accrual,
        })
    }

    /// Contract terms.
    #[inline]
    pub fn terms(&self) -> &CdsTerms<T> {
        &self.terms
    }

    /// Accrual since the previous coupon.
    #[inline]
    pub fn previous_accrual(&self) -> T {
        self.previous_accrual
    }
}
