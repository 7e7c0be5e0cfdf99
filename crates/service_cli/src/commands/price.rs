//! Price command implementation
//!
//! Calibrates the hazard curve, then values every trade in the market data
//! file against it. A curve with a negative hazard is refused unless the
//! caller opts in, in which case the report carries the flag.

use clap::ValueEnum;
use credit_core::types::Date;
use credit_models::instruments::credit::CdsPricer;
use credit_optimiser::bootstrapping::{BootstrapStatus, BootstrapWarning};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use super::calibrate_market;
use crate::config::CliConfig;
use crate::market::MarketData;
use crate::Result;

/// Output format for valuations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Valuation of one trade, scaled by its notional
#[derive(Debug, Clone, Serialize)]
pub struct TradeValuation {
    /// Trade name
    pub name: String,
    /// Face value
    pub notional: f64,
    /// Protection leg value
    pub protection_leg: f64,
    /// Premium leg value including the first-coupon stub
    pub premium_leg: f64,
    /// Protection minus premium
    pub full_mtm: f64,
    /// Accrued premium
    pub accrued: f64,
    /// Full minus accrued
    pub clean_mtm: f64,
    /// Par spread in basis points
    pub par_spread_bp: f64,
}

/// Valuations together with the state of the curve they were priced on
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Valuation date
    pub trade_date: Date,
    /// Clean or flagged
    pub status: BootstrapStatus,
    /// Warnings raised while calibrating
    pub warnings: Vec<BootstrapWarning>,
    /// One row per trade
    pub trades: Vec<TradeValuation>,
}

/// Value every trade in the market data file.
///
/// # Errors
///
/// `CliError::Pricing` when the calibrated curve has a negative hazard and
/// `allow_negative_hazard` is false.
pub fn value_trades(
    config: &CliConfig,
    market: &MarketData,
    allow_negative_hazard: bool,
) -> Result<PriceReport> {
    let (discount, result) = calibrate_market(config, market)?;
    let pricer = if allow_negative_hazard {
        if !result.is_clean() {
            warn!("Pricing against a flagged curve");
        }
        CdsPricer::allow_negative_hazard(&discount, &result.curve)
    } else {
        CdsPricer::new(&discount, &result.curve)?
    };

    let trades = market
        .contracts(&discount)?
        .into_iter()
        .map(|(name, contract)| -> Result<TradeValuation> {
            let notional = contract.terms().notional();
            let unit = pricer.value_non_standard(&contract)?;
            let scaled = unit.scale(notional);
            Ok(TradeValuation {
                name,
                notional,
                protection_leg: scaled.protection_leg,
                premium_leg: scaled.premium_leg,
                full_mtm: scaled.full_mtm,
                accrued: scaled.accrued,
                clean_mtm: scaled.clean_mtm,
                par_spread_bp: unit.par_spread * 1e4,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PriceReport {
        trade_date: market.trade_date,
        status: result.status(),
        warnings: result.warnings.clone(),
        trades,
    })
}

fn print_table(report: &PriceReport) {
    let rows = &report.trades;
    if report.status == BootstrapStatus::Flagged {
        println!("\nWARNING: curve is flagged");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }
    println!("\n┌──────────────────────┬─────────────────┬─────────────────┬─────────────────┬─────────────────┬─────────┐");
    println!("│ Trade                │ Protection      │ Premium         │ Full MTM        │ Clean MTM       │ Par bp  │");
    println!("├──────────────────────┼─────────────────┼─────────────────┼─────────────────┼─────────────────┼─────────┤");
    if rows.is_empty() {
        println!("│ (no trades)          │                 │                 │                 │                 │         │");
    }
    for row in rows {
        println!(
            "│ {:<20} │ {:>15.2} │ {:>15.2} │ {:>15.2} │ {:>15.2} │ {:>7.2} │",
            row.name, row.protection_leg, row.premium_leg, row.full_mtm, row.clean_mtm, row.par_spread_bp
        );
    }
    println!("└──────────────────────┴─────────────────┴─────────────────┴─────────────────┴─────────────────┴─────────┘");
}

/// Run the price command
pub fn run(
    config: &CliConfig,
    market_data: &Path,
    format: OutputFormat,
    allow_negative_hazard: bool,
) -> Result<()> {
    info!("Starting pricing...");
    info!("  Market data: {}", market_data.display());
    info!("  Output format: {:?}", format);

    let market = MarketData::load(market_data)?;
    let report = value_trades(config, &market, allow_negative_hazard)?;

    match format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!("Pricing complete: {} trades", report.trades.len());
    Ok(())
}
