//! Benchmarks for credit_models leg integrators and pricer.

use credit_core::market_data::curves::{NelsonSiegelCurve, PiecewiseHazardCurve};
use credit_core::types::Date;
use credit_models::instruments::credit::legs::{
    premium_leg_value, protection_leg_derivative, protection_leg_value,
};
use credit_models::instruments::credit::{
    CdsPricer, CdsTerms, IntegrationPartition, NonStandardCds,
};
use credit_models::schedules::CdsScheduleBuilder;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn discount() -> NelsonSiegelCurve<f64> {
    NelsonSiegelCurve::new(0.0408, -0.0396, -0.0511, 1.614).unwrap()
}

fn hazard_curve() -> PiecewiseHazardCurve<f64> {
    let knots = [0.0, 1.05, 2.05, 3.05, 4.05, 5.06, 7.06, 10.06, 15.06, 20.07, 30.08];
    let rates = [0.019, 0.0224, 0.0258, 0.0286, 0.0309, 0.0317, 0.032, 0.0323, 0.0329, 0.0343];
    PiecewiseHazardCurve::new(&knots, &rates).unwrap()
}

fn contract(maturity: Date, discount: &NelsonSiegelCurve<f64>) -> NonStandardCds<f64> {
    let coupons = CdsScheduleBuilder::new()
        .trade_date(Date::from_ymd(2014, 2, 28).unwrap())
        .maturity(maturity)
        .build()
        .unwrap();
    let schedule = coupons.payment_schedule(discount).unwrap();
    let terms = CdsTerms::new(0.017, 0.6, schedule).unwrap();
    NonStandardCds::new(terms, coupons.previous_accrual()).unwrap()
}

fn benchmark_protection_leg(c: &mut Criterion) {
    let discount = discount();
    let curve = hazard_curve();
    let mut group = c.benchmark_group("protection_leg");

    for years in [1.0, 5.0, 30.0] {
        let partition = IntegrationPartition::new(years, &discount).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(years), &partition, |b, p| {
            b.iter(|| protection_leg_value(black_box(p), &curve, 0.45))
        });
    }

    group.finish();
}

fn benchmark_protection_derivative(c: &mut Criterion) {
    let discount = discount();
    let curve = hazard_curve();
    let partition = IntegrationPartition::new(30.08, &discount).unwrap();

    c.bench_function("protection_leg_derivative_30y", |b| {
        b.iter(|| protection_leg_derivative(black_box(&partition), &curve, 0.45, 9))
    });
}

fn benchmark_premium_leg(c: &mut Criterion) {
    let discount = discount();
    let curve = hazard_curve();
    let cds = contract(Date::from_ymd(2044, 3, 20).unwrap(), &discount);

    c.bench_function("premium_leg_30y", |b| {
        b.iter(|| premium_leg_value(0.017, black_box(cds.terms().schedule()), &curve, 1))
    });
}

fn benchmark_portfolio(c: &mut Criterion) {
    let discount = discount();
    let curve = hazard_curve();
    let pricer = CdsPricer::new(&discount, &curve).unwrap();
    let mut group = c.benchmark_group("value_portfolio");

    for size in [10, 100] {
        let book: Vec<NonStandardCds<f64>> = (0..size)
            .map(|i| {
                let year = 2015 + (i % 28) as i32;
                contract(Date::from_ymd(year, 5, 15).unwrap(), &discount)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| pricer.value_portfolio(black_box(book)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_protection_leg,
    benchmark_protection_derivative,
    benchmark_premium_leg,
    benchmark_portfolio
);
criterion_main!(benches);
