//! Market data structures for CDS valuation.
//!
//! This module provides discount and survival curve abstractions.
//!
//! # Architecture
//!
//! All curves are generic over `T: Float` and expose `&self`-only query
//! methods, so a calibrated curve can be shared read-only across threads.
//!
//! # Components
//!
//! - [`curves`]: Yield curve and credit curve traits with implementations
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use credit_core::market_data::curves::{CreditCurve, FlatCurve, FlatHazardRateCurve, YieldCurve};
//!
//! let discount = FlatCurve::new(0.03_f64);
//! let credit = FlatHazardRateCurve::new(0.02_f64);
//!
//! let risky_df = discount.discount_factor(5.0).unwrap()
//!     * credit.survival_probability(5.0).unwrap();
//! assert!((risky_df - (-0.25_f64).exp()).abs() < 1e-12);
//! ```

pub mod curves;
pub mod error;

pub use curves::{
    CreditCurve, FlatCurve, FlatHazardRateCurve, NelsonSiegelCurve, PiecewiseHazardCurve,
    YieldCurve,
};
pub use error::MarketDataError;
