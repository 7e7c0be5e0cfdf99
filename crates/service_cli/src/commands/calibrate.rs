//! Calibrate command implementation
//!
//! Bootstraps the hazard curve from the quotes in a market data file.

use credit_core::market_data::curves::CreditCurve;
use credit_core::types::Date;
use credit_optimiser::bootstrapping::{BootstrapStatus, BootstrapWarning, HazardBootstrapResult};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::calibrate_market;
use crate::config::CliConfig;
use crate::market::MarketData;
use crate::Result;

/// One row of the calibrated curve
#[derive(Debug, Clone, Serialize)]
pub struct KnotRow {
    /// Knot index (1-based)
    pub knot: usize,
    /// Knot maturity in years
    pub maturity: f64,
    /// Hazard rate on the segment ending at this knot
    pub hazard: f64,
    /// Survival probability at the knot
    pub survival: f64,
    /// Newton steps used
    pub iterations: usize,
    /// Net value at the solved hazard
    pub residual: f64,
}

/// Curve snapshot written by `--output`
#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    /// Valuation date
    pub trade_date: Date,
    /// Clean or flagged
    pub status: BootstrapStatus,
    /// Per-knot results
    pub knots: Vec<KnotRow>,
    /// Warnings raised while solving
    pub warnings: Vec<BootstrapWarning>,
}

impl CurveReport {
    /// Tabulate a bootstrap result.
    pub fn new(trade_date: Date, result: &HazardBootstrapResult<f64>) -> Result<Self> {
        let knots = result
            .maturities()
            .iter()
            .zip(result.hazard_rates())
            .enumerate()
            .map(|(i, (&maturity, &hazard))| -> Result<KnotRow> {
                Ok(KnotRow {
                    knot: i + 1,
                    maturity,
                    hazard,
                    survival: result.curve.survival_probability(maturity)?,
                    iterations: result.iterations[i],
                    residual: result.residuals[i],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            trade_date,
            status: result.status(),
            knots,
            warnings: result.warnings.clone(),
        })
    }

    fn print_table(&self) {
        println!("\n┌──────┬──────────┬────────────┬────────────┬────────────┐");
        println!("│ Knot │ Maturity │ Hazard     │ Survival   │ Iterations │");
        println!("├──────┼──────────┼────────────┼────────────┼────────────┤");
        for row in &self.knots {
            println!(
                "│ {:>4} │ {:>8.4} │ {:>10.6} │ {:>10.6} │ {:>10} │",
                row.knot, row.maturity, row.hazard, row.survival, row.iterations
            );
        }
        println!("└──────┴──────────┴────────────┴────────────┴────────────┘");
        println!("Status: {:?}", self.status);
    }
}

/// Run the calibrate command
pub fn run(config: &CliConfig, market_data: &Path, output: Option<&Path>) -> Result<()> {
    info!("Starting calibration...");
    info!("  Market data: {}", market_data.display());

    let market = MarketData::load(market_data)?;
    let (_, result) = calibrate_market(config, &market)?;
    let report = CurveReport::new(market.trade_date, &result)?;
    report.print_table();

    if let Some(output_path) = output {
        info!("Writing curve snapshot to: {}", output_path.display());
        std::fs::write(output_path, serde_json::to_string_pretty(&report)?)?;
    }

    info!("Calibration complete");
    Ok(())
}
