//! # credit_optimiser
//!
//! Hazard-curve calibration for CDS quotes.
//!
//! This crate sits on top of `credit_models` (L2) and solves the inverse
//! problem: given par spreads of standard contracts at increasing maturities,
//! find the piecewise-constant hazard rates that reprice every one of them.
//!
//! ## Architecture Position
//!
//! Layer 2.5, depending on `credit_core` (L1) and `credit_models` (L2).
//!
//! ## Modules
//!
//! - `bootstrapping`: sequential knot-by-knot Newton bootstrap
//!
//! ## Example
//!
//! ```
//! use credit_core::market_data::curves::FlatCurve;
//! use credit_models::schedules::PaymentSchedule;
//! use credit_optimiser::bootstrapping::{CdsQuote, HazardBootstrapper};
//!
//! let discount = FlatCurve::new(0.02_f64);
//! let quotes: Vec<CdsQuote<f64>> = [1.0, 2.0, 3.0]
//!     .iter()
//!     .zip([0.0100, 0.0120, 0.0135])
//!     .map(|(&maturity, spread)| {
//!         let times: Vec<f64> = (0..=(maturity * 4.0) as usize).map(|i| i as f64 * 0.25).collect();
//!         let intervals = vec![0.25; times.len() - 1];
//!         let schedule = PaymentSchedule::new(times, intervals, &discount).unwrap();
//!         CdsQuote::new(maturity, spread, 0.4, schedule).unwrap()
//!     })
//!     .collect();
//!
//! let result = HazardBootstrapper::with_defaults().bootstrap(&quotes, &discount).unwrap();
//! assert_eq!(result.hazard_rates().len(), 3);
//! assert!(result.is_clean());
//! ```

pub mod bootstrapping;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bootstrapping::*;
}
