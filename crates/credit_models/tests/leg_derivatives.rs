//! Analytic hazard derivatives of the legs checked against forward-mode AD.
//!
//! `Dual64` does not implement `num_traits::Float`, so the leg sums are
//! restated over dual numbers here. Each restatement is pinned to the library
//! leg through its real part before the dual part is compared.

use approx::assert_relative_eq;
use credit_core::market_data::curves::{FlatCurve, PiecewiseHazardCurve};
use credit_models::instruments::credit::legs::{
    premium_leg_derivative, premium_leg_value, protection_leg_derivative, protection_leg_value,
    standard_value_and_derivative,
};
use credit_models::instruments::credit::{
    CdsTerms, IntegrationPartition, PartitionCache, StandardCds,
};
use credit_models::schedules::PaymentSchedule;
use num_dual::{Dual64, DualNum};

fn curve() -> PiecewiseHazardCurve<f64> {
    PiecewiseHazardCurve::new(&[0.0, 1.05, 2.05, 5.05], &[0.019, 0.0224, 0.0286]).unwrap()
}

fn schedule(discount: &FlatCurve<f64>) -> PaymentSchedule<f64> {
    let mut times = vec![0.0, 0.055];
    while times[times.len() - 1] + 0.25 < 5.05 {
        let next = times[times.len() - 1] + 0.25;
        times.push(next);
    }
    times.push(5.05);
    let intervals: Vec<f64> = times.windows(2).map(|w| (w[1] - w[0]) * 365.0 / 360.0).collect();
    PaymentSchedule::new(times, intervals, discount).unwrap()
}

/// Survival with `h[seed]` carried as a dual number.
fn dual_survival(curve: &PiecewiseHazardCurve<f64>, t: f64, seed: usize) -> Dual64 {
    let mut integrated = Dual64::from(0.0);
    for (j, &h) in curve.hazard_rates().iter().enumerate() {
        let rate = if j == seed {
            Dual64::new(h, 1.0)
        } else {
            Dual64::from(h)
        };
        integrated = integrated + rate * curve.segment_exposure(t, j).unwrap();
    }
    (-integrated).exp()
}

fn dual_protection(
    partition: &IntegrationPartition<f64>,
    curve: &PiecewiseHazardCurve<f64>,
    recovery: f64,
    seed: usize,
) -> Dual64 {
    let s = partition.points();
    let z = partition.discount_factors();
    let mut sum = Dual64::from(0.0);
    for i in 1..s.len() {
        let dq = dual_survival(curve, s[i - 1], seed) - dual_survival(curve, s[i], seed);
        sum = sum + dq * (0.5 * (z[i - 1] + z[i]));
    }
    sum * (1.0 - recovery)
}

fn dual_premium(
    spread: f64,
    schedule: &PaymentSchedule<f64>,
    curve: &PiecewiseHazardCurve<f64>,
    seed: usize,
) -> Dual64 {
    let t = schedule.time_to_pmt();
    let izs = schedule.interval_mult_z();
    let mut sum = Dual64::from(0.0);
    for i in 1..t.len() {
        let q = dual_survival(curve, t[i - 1], seed) + dual_survival(curve, t[i], seed);
        sum = sum + q * izs[i - 1];
    }
    sum * (spread * 0.5)
}

#[test]
fn test_protection_derivative_matches_ad() {
    let discount = FlatCurve::new(0.012);
    let curve = curve();
    let partition = IntegrationPartition::new(5.05, &discount).unwrap();

    for seed in 0..curve.segments() {
        let ad = dual_protection(&partition, &curve, 0.45, seed);
        let value = protection_leg_value(&partition, &curve, 0.45).unwrap();
        let analytic = protection_leg_derivative(&partition, &curve, 0.45, seed).unwrap();
        assert_relative_eq!(ad.re, value, max_relative = 1e-13);
        assert_relative_eq!(ad.eps, analytic, max_relative = 1e-12);
    }
}

#[test]
fn test_premium_derivative_matches_ad() {
    let discount = FlatCurve::new(0.012);
    let curve = curve();
    let schedule = schedule(&discount);

    for seed in 0..curve.segments() {
        let ad = dual_premium(0.0152, &schedule, &curve, seed);
        let value = premium_leg_value(0.0152, &schedule, &curve, 1).unwrap();
        let analytic = premium_leg_derivative(0.0152, &schedule, &curve, 1, seed).unwrap();
        assert_relative_eq!(ad.re, value, max_relative = 1e-13);
        assert_relative_eq!(ad.eps, analytic, max_relative = 1e-12);
    }
}

#[test]
fn test_net_derivative_matches_ad() {
    let discount = FlatCurve::new(0.012);
    let curve = curve();
    let schedule = schedule(&discount);
    let cache = PartitionCache::build(curve.maturities(), &discount).unwrap();
    let contract = StandardCds::new(CdsTerms::new(0.0152, 0.45, schedule.clone()).unwrap(), 3).unwrap();

    let (value, slope) = standard_value_and_derivative(&contract, &cache, &curve).unwrap();
    let ad = dual_protection(cache.partition(3).unwrap(), &curve, 0.45, 2)
        - dual_premium(0.0152, &schedule, &curve, 2);

    assert_relative_eq!(value, ad.re, max_relative = 1e-12);
    assert_relative_eq!(slope, ad.eps, max_relative = 1e-12);
}
