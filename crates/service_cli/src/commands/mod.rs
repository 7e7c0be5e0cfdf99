//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod calibrate;
pub mod check;
pub mod price;

use credit_core::market_data::curves::NelsonSiegelCurve;
use credit_optimiser::bootstrapping::{HazardBootstrapResult, HazardBootstrapper};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::market::MarketData;
use crate::Result;

/// Discount curve and calibrated hazard curve for a market data file.
pub(crate) fn calibrate_market(
    config: &CliConfig,
    market: &MarketData,
) -> Result<(NelsonSiegelCurve<f64>, HazardBootstrapResult<f64>)> {
    let discount = market.discount_curve()?;
    let quotes = market.quotes(&discount)?;
    info!(
        "Calibrating {} quotes as of {}",
        quotes.len(),
        market.trade_date
    );

    let bootstrapper = HazardBootstrapper::new(config.calibration.to_bootstrap_config());
    let result = bootstrapper.bootstrap(&quotes, &discount)?;
    for warning in &result.warnings {
        warn!("{}", warning);
    }
    Ok((discount, result))
}
