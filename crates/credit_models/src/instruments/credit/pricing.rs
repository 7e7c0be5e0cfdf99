//! CDS valuation facade.
//!
//! # Pricing Model
//!
//! ```text
//! full MTM  = V_prot - V_prem
//! accrued   = -prev * c             (non-standard only)
//! clean MTM = full MTM - accrued
//! ```
//!
//! Non-standard contracts pay the first coupon as a stub covering the
//! accrual since the previous coupon date:
//!
//! ```text
//! stub = c (prev Z0 (1 - Q0) + 0.5 t0 Z0 (1 - Q0) + (prev + t0) Z0 Q0)
//! ```
//!
//! with `t0 = time_to_pmt[1]`, `Z0 = Z(t0)` and `Q0 = Q(t0)`.

use super::cds::{NonStandardCds, StandardCds};
use super::legs::{premium_leg_value, protection_leg_value};
use super::partition::{IntegrationPartition, PartitionCache};
use credit_core::market_data::curves::{CreditCurve, PiecewiseHazardCurve, YieldCurve};
use credit_core::types::PricingError;
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Valuation of one CDS, per unit notional unless scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CdsValuation<T: Float> {
    /// Present value of the protection leg.
    pub protection_leg: T,
    /// Present value of the premium leg (stub included).
    pub premium_leg: T,
    /// Protection minus premium.
    pub full_mtm: T,
    /// Accrued premium, `-prev * spread`.
    pub accrued: T,
    /// Full MTM minus accrued.
    pub clean_mtm: T,
    /// Premium leg per unit spread.
    pub risky_annuity: T,
    /// Spread that sets the full MTM to zero.
    pub par_spread: T,
}

impl<T: Float> CdsValuation<T> {
    fn from_legs(protection_leg: T, premium_leg: T, spread: T, accrued: T) -> Self {
        let full_mtm = protection_leg - premium_leg;
        let risky_annuity = if spread > T::zero() {
            premium_leg / spread
        } else {
            T::zero()
        };
        let par_spread = if premium_leg > T::zero() {
            spread * protection_leg / premium_leg
        } else {
            T::zero()
        };
        Self {
            protection_leg,
            premium_leg,
            full_mtm,
            accrued,
            clean_mtm: full_mtm - accrued,
            risky_annuity,
            par_spread,
        }
    }

    /// Scale every amount by a face value; the par spread is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use credit_core::market_data::curves::{FlatCurve, PiecewiseHazardCurve};
    /// # use credit_models::instruments::credit::{CdsPricer, CdsTerms, NonStandardCds};
    /// # use credit_models::schedules::PaymentSchedule;
    /// # let discount = FlatCurve::new(0.02_f64);
    /// # let schedule = PaymentSchedule::new(vec![0.0, 0.25, 0.5], vec![0.25, 0.25], &discount).unwrap();
    /// # let curve = PiecewiseHazardCurve::flat_on(&[0.5], 0.02).unwrap();
    /// # let contract = NonStandardCds::new(CdsTerms::new(0.01, 0.4, schedule).unwrap(), 0.05).unwrap();
    /// let pricer = CdsPricer::new(&discount, &curve).unwrap();
    /// let unit = pricer.value_non_standard(&contract).unwrap();
    /// let scaled = unit.scale(1.0e6);
    /// assert!((scaled.clean_mtm - unit.clean_mtm * 1.0e6).abs() < 1e-6);
    /// assert_eq!(scaled.par_spread, unit.par_spread);
    /// ```
    pub fn scale(&self, face: T) -> Self {
        Self {
            protection_leg: self.protection_leg * face,
            premium_leg: self.premium_leg * face,
            full_mtm: self.full_mtm * face,
            accrued: self.accrued * face,
            clean_mtm: self.clean_mtm * face,
            risky_annuity: self.risky_annuity * face,
            par_spread: self.par_spread,
        }
    }
}

/// CDS pricer over a discount curve and a calibrated hazard curve.
///
/// Construction refuses a curve carrying a negative or non-finite hazard;
/// [`allow_negative_hazard`](Self::allow_negative_hazard) is the explicit
/// opt-in for such curves.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float`
/// * `D` - Discount curve implementing `YieldCurve<T>`
pub struct CdsPricer<'a, T: Float, D: YieldCurve<T>> {
    discount: &'a D,
    curve: &'a PiecewiseHazardCurve<T>,
}

impl<'a, T: Float, D: YieldCurve<T>> CdsPricer<'a, T, D> {
    /// Create a pricer, validating the hazard curve.
    ///
    /// # Errors
    ///
    /// `PricingError::ModelFailure` naming the first offending segment.
    pub fn new(discount: &'a D, curve: &'a PiecewiseHazardCurve<T>) -> Result<Self, PricingError> {
        for (segment, &h) in curve.hazard_rates().iter().enumerate() {
            if !h.is_finite() || h < T::zero() {
                return Err(PricingError::ModelFailure(format!(
                    "hazard rate {} in segment {} is not a valid intensity",
                    h.to_f64().unwrap_or(f64::NAN),
                    segment
                )));
            }
        }
        Ok(Self { discount, curve })
    }

    /// Create a pricer that accepts negative hazards.
    pub fn allow_negative_hazard(discount: &'a D, curve: &'a PiecewiseHazardCurve<T>) -> Self {
        Self { discount, curve }
    }

    /// Value a calibration instrument with its cached partition.
    ///
    /// Accrued is zero and clean equals full.
    pub fn value_standard(
        &self,
        contract: &StandardCds<T>,
        cache: &PartitionCache<T>,
    ) -> Result<CdsValuation<T>, PricingError> {
        let terms = contract.terms();
        let partition = cache.partition(contract.knot())?;
        let protection = protection_leg_value(partition, self.curve, terms.recovery())?;
        let premium = premium_leg_value(terms.spread(), terms.schedule(), self.curve, 1)?;
        finite(CdsValuation::from_legs(
            protection,
            premium,
            terms.spread(),
            T::zero(),
        ))
    }

    /// Par spread of a calibration instrument.
    pub fn par_spread_standard(
        &self,
        contract: &StandardCds<T>,
        cache: &PartitionCache<T>,
    ) -> Result<T, PricingError> {
        let terms = contract.terms();
        let partition = cache.partition(contract.knot())?;
        let protection = protection_leg_value(partition, self.curve, terms.recovery())?;
        let annuity = premium_leg_value(T::one(), terms.schedule(), self.curve, 1)?;
        if annuity <= T::zero() {
            return Err(PricingError::NumericalInstability(
                "risky annuity is not positive".to_string(),
            ));
        }
        Ok(protection / annuity)
    }

    /// Value an arbitrary contract with a fresh partition and a first-coupon stub.
    pub fn value_non_standard(
        &self,
        contract: &NonStandardCds<T>,
    ) -> Result<CdsValuation<T>, PricingError> {
        let terms = contract.terms();
        let schedule = terms.schedule();
        let spread = terms.spread();
        let prev = contract.previous_accrual();

        let partition = IntegrationPartition::new(terms.maturity(), self.discount)?;
        let protection = protection_leg_value(&partition, self.curve, terms.recovery())?;

        let t0 = schedule.first_payment_time();
        let z0 = self.discount.discount_factor(t0)?;
        let q0 = self.curve.survival_probability(t0)?;
        let half = T::from(0.5).unwrap();
        let stub = spread
            * (prev * z0 * (T::one() - q0)
                + half * t0 * z0 * (T::one() - q0)
                + (prev + t0) * z0 * q0);
        let premium = premium_leg_value(spread, schedule, self.curve, 2)? + stub;

        finite(CdsValuation::from_legs(
            protection,
            premium,
            spread,
            -prev * spread,
        ))
    }

    /// The hazard curve this pricer values against.
    #[inline]
    pub fn curve(&self) -> &PiecewiseHazardCurve<T> {
        self.curve
    }
}

#[cfg(not(feature = "parallel"))]
impl<'a, T: Float, D: YieldCurve<T>> CdsPricer<'a, T, D> {
    /// Value a book of non-standard contracts, in order.
    pub fn value_portfolio(
        &self,
        contracts: &[NonStandardCds<T>],
    ) -> Result<Vec<CdsValuation<T>>, PricingError> {
        contracts
            .iter()
            .map(|contract| self.value_non_standard(contract))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<'a, T, D> CdsPricer<'a, T, D>
where
    T: Float + Send + Sync,
    D: YieldCurve<T> + Sync,
{
    /// Value a book of non-standard contracts across the rayon pool.
    ///
    /// Results keep the input order; each contract is summed sequentially.
    pub fn value_portfolio(
        &self,
        contracts: &[NonStandardCds<T>],
    ) -> Result<Vec<CdsValuation<T>>, PricingError> {
        contracts
            .par_iter()
            .map(|contract| self.value_non_standard(contract))
            .collect()
    }
}

fn finite<T: Float>(valuation: CdsValuation<T>) -> Result<CdsValuation<T>, PricingError> {
    if valuation.full_mtm.is_finite() && valuation.clean_mtm.is_finite() {
        Ok(valuation)
    } else {
        Err(PricingError::NumericalInstability(
            "valuation produced a non-finite amount".to_string(),
        ))
    }
}
