//! Schedule generation error types.

use credit_core::market_data::MarketDataError;
use credit_core::types::{Date, DateError, PricingError};
use thiserror::Error;

/// Errors that can occur during schedule generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Trade date must be before maturity.
    #[error("Trade date {start} must be before maturity {end}")]
    InvalidDateRange {
        /// The trade date.
        start: Date,
        /// The maturity date.
        end: Date,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Roll day outside 1..=31.
    #[error("Invalid roll day {day}: must be between 1 and 31")]
    InvalidRollDay {
        /// The rejected roll day.
        day: u32,
    },

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },

    /// Payment times not starting at zero or not strictly increasing.
    #[error("Payment times must start at 0 and increase strictly: violation at index {index} (t = {t})")]
    InvalidPaymentTimes {
        /// Offending index
        index: usize,
        /// Offending time
        t: f64,
    },

    /// Per-period array with the wrong length.
    #[error("{what} has {got} entries, expected {expected}")]
    LengthMismatch {
        /// Which array
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// Accrual fraction negative or non-finite.
    #[error("Invalid accrual fraction {value} for period {period}")]
    InvalidAccrual {
        /// 1-based period index
        period: usize,
        /// Offending value
        value: f64,
    },

    /// Discount curve query failed.
    #[error("Discount curve error: {0}")]
    Discount(#[from] MarketDataError),
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::DateOverflow {
            reason: err.to_string(),
        }
    }
}

impl From<ScheduleError> for PricingError {
    fn from(err: ScheduleError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
