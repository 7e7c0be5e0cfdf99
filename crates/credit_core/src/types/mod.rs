//! Core time and error types.
//!
//! This module provides:
//! - `time`: Time types (Date, DayCountConvention, BusinessDayConvention) for schedule and curve calculations
//! - `error`: Structured error types for pricing, date, and solver operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`], [`BusinessDayConvention`], [`time_to_maturity_dates`] from `time`
//! - [`PricingError`], [`DateError`], [`SolverError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, PricingError, SolverError};
pub use time::{time_to_maturity_dates, BusinessDayConvention, Date, DayCountConvention};
