//! Sequential hazard bootstrapping engine.
//!
//! This module provides `HazardBootstrapper<T>`, which strips a piecewise
//! constant hazard curve from CDS par spreads one knot at a time using
//! Newton-Raphson with analytic leg derivatives.

use super::config::HazardBootstrapConfig;
use super::error::BootstrapError;
use super::instrument::CdsQuote;
use super::result::{BootstrapWarning, HazardBootstrapResult};
use credit_core::market_data::curves::{PiecewiseHazardCurve, YieldCurve};
use credit_core::math::solvers::NewtonRaphsonSolver;
use credit_core::types::{PricingError, SolverError};
use credit_models::instruments::credit::legs::standard_value_and_derivative;
use credit_models::instruments::credit::{PartitionCache, StandardCds};
use num_traits::Float;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Schedule maturity and quote maturity may differ by this much (years).
const MATURITY_MATCH: f64 = 1e-9;

/// Failure inside one Newton evaluation, before the knot is attached.
#[derive(Debug)]
enum StepError {
    Solver(SolverError),
    Pricing(PricingError),
}

impl From<SolverError> for StepError {
    fn from(err: SolverError) -> Self {
        StepError::Solver(err)
    }
}

impl From<PricingError> for StepError {
    fn from(err: PricingError) -> Self {
        StepError::Pricing(err)
    }
}

/// Sequential hazard-curve bootstrapper.
///
/// For knot `m = 1..=M`, in increasing maturity order:
/// 1. seed `h[m-1]` with `initial_hazard`;
/// 2. value the standard contract `m` against its cached partition;
/// 3. stop once `|V_m| <= tolerance`, otherwise step `h <- h - V / (dV/dh)`.
///
/// Earlier hazards are frozen while knot `m` is solved. The hazard vector
/// lives in an accumulator owned by the engine and is published as an
/// immutable `Arc` snapshot only after the last knot.
///
/// # Examples
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::schedules::PaymentSchedule;
/// use credit_optimiser::bootstrapping::{CdsQuote, HazardBootstrapConfig, HazardBootstrapper};
///
/// let discount = FlatCurve::new(0.01_f64);
/// let schedule = PaymentSchedule::new(vec![0.0, 0.5, 1.0], vec![0.5, 0.5], &discount).unwrap();
/// let quote = CdsQuote::new(1.0, 0.012, 0.4, schedule).unwrap();
///
/// let bootstrapper = HazardBootstrapper::new(HazardBootstrapConfig::default());
/// let result = bootstrapper.bootstrap(&[quote], &discount).unwrap();
/// let h = result.hazard_rates()[0];
/// assert!((h - 0.012 / 0.6).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct HazardBootstrapper<T: Float> {
    config: HazardBootstrapConfig<T>,
}

impl<T: Float> HazardBootstrapper<T> {
    /// Create a bootstrapper.
    pub fn new(config: HazardBootstrapConfig<T>) -> Self {
        Self { config }
    }

    /// Create a bootstrapper with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(HazardBootstrapConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &HazardBootstrapConfig<T> {
        &self.config
    }

    /// Calibrate a hazard curve to `quotes`.
    ///
    /// Quotes must be sorted by strictly increasing maturity; their
    /// maturities become the knots.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for an empty or unsorted quote set, an invalid
    ///   configuration, or a schedule that does not end at its quote maturity
    /// - `ConvergenceFailure` when a knot exhausts `max_iterations`
    /// - `DegenerateDerivative` when `|dV/dh|` drops under the floor
    /// - `NegativeHazard` when `reject_negative_hazard` is set
    pub fn bootstrap<D: YieldCurve<T>>(
        &self,
        quotes: &[CdsQuote<T>],
        discount: &D,
    ) -> Result<HazardBootstrapResult<T>, BootstrapError> {
        self.config
            .validate()
            .map_err(|errors| BootstrapError::invalid_input(errors.join("; ")))?;
        validate_quotes(quotes)?;

        let maturities: Vec<T> = quotes.iter().map(|q| q.maturity()).collect();
        let cache = PartitionCache::build(&maturities, discount)?;
        let mut accumulator = PiecewiseHazardCurve::flat_on(&maturities, self.config.initial_hazard)?;

        let solver = NewtonRaphsonSolver::new(self.config.solver_config());
        let mut residuals = Vec::with_capacity(quotes.len());
        let mut iterations = Vec::with_capacity(quotes.len());
        let mut warnings = Vec::new();

        for (i, quote) in quotes.iter().enumerate() {
            let knot = i + 1;
            let contract = quote.to_standard(knot)?;

            let outcome = solver
                .solve(
                    |h| evaluate(&mut accumulator, &contract, &cache, h),
                    self.config.initial_hazard,
                )
                .map_err(|e| self.knot_error(e, knot, quote.maturity()))?;

            // Leave the accumulator at the root, not at the last trial point.
            accumulator.set_rate(i, outcome.root)?;

            let hazard = outcome.root.to_f64().unwrap_or(f64::NAN);
            debug!(
                knot,
                maturity = quote.maturity().to_f64().unwrap_or(f64::NAN),
                hazard,
                iterations = outcome.iterations,
                residual = outcome.residual.to_f64().unwrap_or(f64::NAN),
                "Solved knot"
            );

            if outcome.root < T::zero() {
                if self.config.reject_negative_hazard {
                    return Err(BootstrapError::negative_hazard(knot, hazard));
                }
                warn!(knot, hazard, "Negative hazard rate; curve flagged");
                warnings.push(BootstrapWarning::NegativeHazard { knot, hazard });
            }

            residuals.push(outcome.residual);
            iterations.push(outcome.iterations);
        }

        let result = HazardBootstrapResult {
            curve: Arc::new(accumulator),
            cache: Arc::new(cache),
            residuals,
            iterations,
            warnings,
        };

        info!(
            knots = quotes.len(),
            total_iterations = result.total_iterations(),
            max_residual = result.max_residual().to_f64().unwrap_or(f64::NAN),
            status = ?result.status(),
            "Hazard curve bootstrapped"
        );

        Ok(result)
    }

    fn knot_error(&self, err: StepError, knot: usize, maturity: T) -> BootstrapError {
        match err {
            StepError::Solver(SolverError::MaxIterationsExceeded {
                iterations,
                residual,
                ..
            }) => BootstrapError::convergence_failure(
                knot,
                maturity.to_f64().unwrap_or(f64::NAN),
                residual,
                iterations,
            ),
            StepError::Solver(SolverError::DerivativeNearZero { x, derivative }) => {
                BootstrapError::degenerate_derivative(knot, x, derivative)
            }
            StepError::Solver(SolverError::NumericalInstability(message)) => {
                BootstrapError::NumericalInstability { knot, message }
            }
            StepError::Pricing(err) => BootstrapError::Pricing(err),
        }
    }
}

impl<T: Float> Default for HazardBootstrapper<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Set the trial hazard and return the net value and its slope.
fn evaluate<T: Float>(
    accumulator: &mut PiecewiseHazardCurve<T>,
    contract: &StandardCds<T>,
    cache: &PartitionCache<T>,
    hazard: T,
) -> Result<(T, T), StepError> {
    accumulator
        .set_rate(contract.segment(), hazard)
        .map_err(PricingError::from)?;
    Ok(standard_value_and_derivative(contract, cache, accumulator)?)
}

fn validate_quotes<T: Float>(quotes: &[CdsQuote<T>]) -> Result<(), BootstrapError> {
    if quotes.is_empty() {
        return Err(BootstrapError::invalid_input(
            "at least one quote is required",
        ));
    }

    let tolerance = T::from(MATURITY_MATCH).unwrap();
    let mut previous = T::zero();
    for (i, quote) in quotes.iter().enumerate() {
        let knot = i + 1;
        if quote.maturity() <= previous {
            return Err(BootstrapError::invalid_input(format!(
                "quote {} maturity {} does not exceed the previous knot {}",
                knot,
                quote.maturity().to_f64().unwrap_or(f64::NAN),
                previous.to_f64().unwrap_or(f64::NAN)
            )));
        }
        let schedule_end = quote.schedule().maturity();
        if (schedule_end - quote.maturity()).abs() > tolerance {
            return Err(BootstrapError::invalid_input(format!(
                "quote {} schedule ends at {} but the quote matures at {}",
                knot,
                schedule_end.to_f64().unwrap_or(f64::NAN),
                quote.maturity().to_f64().unwrap_or(f64::NAN)
            )));
        }
        previous = quote.maturity();
    }
    Ok(())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use credit_core::market_data::curves::FlatCurve;
    use credit_models::instruments::credit::{CdsPricer, CdsTerms, StandardCds};
    use credit_models::schedules::PaymentSchedule;
    use proptest::prelude::*;

    fn quarterly(maturity: f64, discount: &FlatCurve<f64>) -> PaymentSchedule<f64> {
        let n = (maturity * 4.0).round() as usize;
        let times: Vec<f64> = (0..=n).map(|i| maturity * i as f64 / n as f64).collect();
        PaymentSchedule::new(times, vec![maturity / n as f64; n], discount).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn par_spreads_recover_their_hazards(
            rates in prop::collection::vec(0.001_f64..0.1, 1..8),
            recovery in 0.1_f64..0.7,
            rate in 0.0_f64..0.06,
        ) {
            let discount = FlatCurve::new(rate);
            let maturities: Vec<f64> = (1..=rates.len()).map(|i| i as f64).collect();
            let mut knots = vec![0.0];
            knots.extend_from_slice(&maturities);
            let truth = PiecewiseHazardCurve::new(&knots, &rates).unwrap();
            let cache = PartitionCache::build(&maturities, &discount).unwrap();
            let pricer = CdsPricer::new(&discount, &truth).unwrap();

            let quotes: Vec<CdsQuote<f64>> = maturities
                .iter()
                .enumerate()
                .map(|(i, &m)| {
                    let schedule = quarterly(m, &discount);
                    let terms = CdsTerms::new(0.0, recovery, schedule.clone()).unwrap();
                    let contract = StandardCds::new(terms, i + 1).unwrap();
                    let par = pricer.par_spread_standard(&contract, &cache).unwrap();
                    CdsQuote::new(m, par, recovery, schedule).unwrap()
                })
                .collect();

            let result = HazardBootstrapper::with_defaults()
                .bootstrap(&quotes, &discount)
                .unwrap();
            prop_assert!(result.is_clean());
            for (h, e) in result.hazard_rates().iter().zip(&rates) {
                prop_assert!((h - e).abs() < 1e-6, "recovered {} expected {}", h, e);
            }
        }
    }
}
