//! Benchmarks for credit_optimiser.

use credit_core::market_data::curves::{FlatCurve, NelsonSiegelCurve};
use credit_core::types::Date;
use credit_models::schedules::{CdsScheduleBuilder, PaymentSchedule};
use credit_optimiser::bootstrapping::{CdsQuote, HazardBootstrapConfig, HazardBootstrapper};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Annual knots with a gently rising spread ladder.
fn generate_quotes(count: usize, discount: &FlatCurve<f64>) -> Vec<CdsQuote<f64>> {
    (1..=count)
        .map(|i| {
            let maturity = i as f64;
            let n = i * 4;
            let times: Vec<f64> = (0..=n).map(|k| maturity * k as f64 / n as f64).collect();
            let schedule = PaymentSchedule::new(times, vec![0.25; n], discount).unwrap();
            let spread = 0.01 + i as f64 * 0.0005;
            CdsQuote::new(maturity, spread, 0.4, schedule).unwrap()
        })
        .collect()
}

fn benchmark_bootstrap_sequential(c: &mut Criterion) {
    let discount = FlatCurve::new(0.02);
    let mut group = c.benchmark_group("bootstrap_sequential");

    for size in [5, 10, 30] {
        let quotes = generate_quotes(size, &discount);
        let bootstrapper = HazardBootstrapper::<f64>::with_defaults();

        group.bench_with_input(BenchmarkId::from_parameter(size), &quotes, |b, quotes| {
            b.iter(|| bootstrapper.bootstrap(black_box(quotes), &discount))
        });
    }

    group.finish();
}

fn benchmark_bootstrap_precision(c: &mut Criterion) {
    let discount = FlatCurve::new(0.02);
    let quotes = generate_quotes(10, &discount);
    let mut group = c.benchmark_group("bootstrap_precision");

    let configs = [
        ("fast", HazardBootstrapConfig::<f64>::fast()),
        ("default", HazardBootstrapConfig::default()),
        ("high_precision", HazardBootstrapConfig::high_precision()),
    ];
    for (name, config) in configs {
        let bootstrapper = HazardBootstrapper::new(config);
        group.bench_function(name, |b| {
            b.iter(|| bootstrapper.bootstrap(black_box(&quotes), &discount))
        });
    }

    group.finish();
}

fn benchmark_reference_calibration(c: &mut Criterion) {
    let discount = NelsonSiegelCurve::new(0.0408, -0.0396, -0.0511, 1.614).unwrap();
    let trade = Date::from_ymd(2014, 2, 28).unwrap();
    let ladder = [
        (2015, 103.07),
        (2016, 112.0),
        (2017, 121.0),
        (2018, 129.0),
        (2019, 136.0),
        (2021, 145.0),
        (2024, 152.0),
        (2029, 157.5),
        (2034, 160.5),
        (2044, 164.13),
    ];
    let quotes: Vec<CdsQuote<f64>> = ladder
        .iter()
        .map(|&(year, bp)| {
            let coupons = CdsScheduleBuilder::new()
                .trade_date(trade)
                .maturity(Date::from_ymd(year, 3, 20).unwrap())
                .roll_day(20)
                .build()
                .unwrap();
            CdsQuote::from_coupons(&coupons, bp * 1e-4, 0.45, &discount).unwrap()
        })
        .collect();
    let bootstrapper = HazardBootstrapper::<f64>::with_defaults();

    c.bench_function("bootstrap_reference_2014", |b| {
        b.iter(|| bootstrapper.bootstrap(black_box(&quotes), &discount))
    });
}

criterion_group!(
    benches,
    benchmark_bootstrap_sequential,
    benchmark_bootstrap_precision,
    benchmark_reference_calibration
);
criterion_main!(benches);
