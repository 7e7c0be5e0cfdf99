//! Protection and premium leg integrators.
//!
//! All values are per unit notional. Every sum runs strictly left to right
//! over the grid or the payment schedule.
//!
//! # Protection leg
//!
//! Trapezoidal discounting of the default density on the partition:
//!
//! ```text
//! V_prot = (1 - R) Σ_{i=1}^{K} 0.5 (Z(s_{i-1}) + Z(s_i)) (Q(s_{i-1}) - Q(s_i))
//! ```
//!
//! # Premium leg
//!
//! Average of start and end survival on each coupon period:
//!
//! ```text
//! V_prem = c * 0.5 Σ_{i=first}^{N} izs[i-1] (Q(t_{i-1}) + Q(t_i))
//! ```
//!
//! # Hazard derivatives
//!
//! With `dQ = dQ(t)/dh[j]` from
//! [`PiecewiseHazardCurve::survival_sensitivity`]:
//!
//! ```text
//! dV_prot/dh_j = (1 - R) Σ 0.5 (Z_{i-1} + Z_i) (dQ_{i-1} - dQ_i)
//! dV_prem/dh_j = c * 0.5 Σ izs[i-1] (dQ_{i-1} + dQ_i)
//! ```

use super::cds::StandardCds;
use super::partition::{IntegrationPartition, PartitionCache};
use crate::schedules::PaymentSchedule;
use credit_core::market_data::curves::{CreditCurve, PiecewiseHazardCurve};
use credit_core::types::PricingError;
use num_traits::Float;

/// Protection leg value on a partition.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
/// use credit_models::instruments::credit::IntegrationPartition;
/// use credit_models::instruments::credit::legs::protection_leg_value;
///
/// // Without discounting the leg is (1 - R) times the default probability
/// let partition = IntegrationPartition::new(5.0_f64, &FlatCurve::new(0.0)).unwrap();
/// let value = protection_leg_value(&partition, &FlatHazardRateCurve::new(0.02), 0.4).unwrap();
/// assert!((value - 0.6 * (1.0 - (-0.1_f64).exp())).abs() < 1e-12);
/// ```
pub fn protection_leg_value<T, C>(
    partition: &IntegrationPartition<T>,
    curve: &C,
    recovery: T,
) -> Result<T, PricingError>
where
    T: Float,
    C: CreditCurve<T>,
{
    let half = T::from(0.5).unwrap();
    let points = partition.points();
    let z = partition.discount_factors();

    let mut q_prev = curve.survival_probability(points[0])?;
    let mut sum = T::zero();
    for i in 1..points.len() {
        let q = curve.survival_probability(points[i])?;
        sum = sum + half * (z[i - 1] + z[i]) * (q_prev - q);
        q_prev = q;
    }
    Ok((T::one() - recovery) * sum)
}

/// Premium leg value from payment `first_payment` (1-based) onwards.
///
/// `first_payment` may be `N + 1`, which yields an empty sum.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
/// use credit_models::instruments::credit::legs::premium_leg_value;
/// use credit_models::schedules::PaymentSchedule;
///
/// let schedule = PaymentSchedule::new(vec![0.0, 0.5, 1.0], vec![0.5, 0.5], &FlatCurve::new(0.0_f64)).unwrap();
/// let riskless = premium_leg_value(0.01, &schedule, &FlatHazardRateCurve::new(0.0), 1).unwrap();
/// assert!((riskless - 0.01).abs() < 1e-15);
/// ```
pub fn premium_leg_value<T, C>(
    spread: T,
    schedule: &PaymentSchedule<T>,
    curve: &C,
    first_payment: usize,
) -> Result<T, PricingError>
where
    T: Float,
    C: CreditCurve<T>,
{
    check_first_payment(schedule, first_payment)?;
    let half = T::from(0.5).unwrap();
    let times = schedule.time_to_pmt();
    let izs = schedule.interval_mult_z();

    let mut sum = T::zero();
    if first_payment <= schedule.payments() {
        let mut q_prev = curve.survival_probability(times[first_payment - 1])?;
        for i in first_payment..times.len() {
            let q = curve.survival_probability(times[i])?;
            sum = sum + izs[i - 1] * (q_prev + q);
            q_prev = q;
        }
    }
    Ok(spread * half * sum)
}

/// Derivative of the protection leg with respect to `h[segment]`.
pub fn protection_leg_derivative<T: Float>(
    partition: &IntegrationPartition<T>,
    curve: &PiecewiseHazardCurve<T>,
    recovery: T,
    segment: usize,
) -> Result<T, PricingError> {
    let half = T::from(0.5).unwrap();
    let points = partition.points();
    let z = partition.discount_factors();

    let mut dq_prev = curve.survival_sensitivity(points[0], segment)?;
    let mut sum = T::zero();
    for i in 1..points.len() {
        let dq = curve.survival_sensitivity(points[i], segment)?;
        sum = sum + half * (z[i - 1] + z[i]) * (dq_prev - dq);
        dq_prev = dq;
    }
    Ok((T::one() - recovery) * sum)
}

/// Derivative of the premium leg with respect to `h[segment]`.
pub fn premium_leg_derivative<T: Float>(
    spread: T,
    schedule: &PaymentSchedule<T>,
    curve: &PiecewiseHazardCurve<T>,
    first_payment: usize,
    segment: usize,
) -> Result<T, PricingError> {
    check_first_payment(schedule, first_payment)?;
    let half = T::from(0.5).unwrap();
    let times = schedule.time_to_pmt();
    let izs = schedule.interval_mult_z();

    let mut sum = T::zero();
    if first_payment <= schedule.payments() {
        let mut dq_prev = curve.survival_sensitivity(times[first_payment - 1], segment)?;
        for i in first_payment..times.len() {
            let dq = curve.survival_sensitivity(times[i], segment)?;
            sum = sum + izs[i - 1] * (dq_prev + dq);
            dq_prev = dq;
        }
    }
    Ok(spread * half * sum)
}

/// Net value (protection minus premium) of a standard contract.
pub fn standard_net_value<T, C>(
    contract: &StandardCds<T>,
    cache: &PartitionCache<T>,
    curve: &C,
) -> Result<T, PricingError>
where
    T: Float,
    C: CreditCurve<T>,
{
    let terms = contract.terms();
    let partition = cache.partition(contract.knot())?;
    let protection = protection_leg_value(partition, curve, terms.recovery())?;
    let premium = premium_leg_value(terms.spread(), terms.schedule(), curve, 1)?;
    Ok(protection - premium)
}

/// Net value of a standard contract and its derivative with respect to the
/// hazard of the contract's own segment `m - 1`.
///
/// This is the residual and slope the bootstrap Newton step consumes.
pub fn standard_value_and_derivative<T: Float>(
    contract: &StandardCds<T>,
    cache: &PartitionCache<T>,
    curve: &PiecewiseHazardCurve<T>,
) -> Result<(T, T), PricingError> {
    let terms = contract.terms();
    let partition = cache.partition(contract.knot())?;
    let segment = contract.segment();

    let value = standard_net_value(contract, cache, curve)?;
    let d_protection = protection_leg_derivative(partition, curve, terms.recovery(), segment)?;
    let d_premium = premium_leg_derivative(terms.spread(), terms.schedule(), curve, 1, segment)?;
    Ok((value, d_protection - d_premium))
}

fn check_first_payment<T: Float>(
    schedule: &PaymentSchedule<T>,
    first_payment: usize,
) -> Result<(), PricingError> {
    if first_payment == 0 || first_payment > schedule.payments() + 1 {
        return Err(PricingError::InvalidInput(format!(
            "first payment {} outside 1..={} for a schedule of {} payments",
            first_payment,
            schedule.payments() + 1,
            schedule.payments()
        )));
    }
    Ok(())
}
