//! Error types for the hazard CLI.

use credit_core::market_data::MarketDataError;
use credit_core::types::PricingError;
use credit_models::schedules::ScheduleError;
use credit_optimiser::bootstrapping::BootstrapError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Market data file unreadable or inconsistent
    #[error("Market data error: {0}")]
    MarketData(String),

    /// Discount or hazard curve rejected
    #[error("Curve error: {0}")]
    Curve(#[from] MarketDataError),

    /// Coupon schedule generation failed
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Hazard bootstrap failed
    #[error("Calibration error: {0}")]
    Calibration(#[from] BootstrapError),

    /// Valuation failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON output failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a market data error
    pub fn market_data(msg: impl Into<String>) -> Self {
        Self::MarketData(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::market_data("no quotes");
        assert_eq!(err.to_string(), "Market data error: no quotes");

        let err: CliError = BootstrapError::invalid_input("empty").into();
        assert!(err.to_string().starts_with("Calibration error"));
    }
}
