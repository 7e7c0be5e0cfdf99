//! # credit_core: Foundation Layer for CDS Curve Calibration
//!
//! ## Layer 1 (Foundation) Role
//!
//! credit_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention`, `BusinessDayConvention` (`types::time`)
//! - Error types: `PricingError`, `DateError`, `SolverError` (`types::error`)
//! - Discount curves: `YieldCurve`, `FlatCurve`, `NelsonSiegelCurve` (`market_data::curves`)
//! - Survival curves: `CreditCurve`, `PiecewiseHazardCurve`, `FlatHazardRateCurve`
//! - Root finding: `NewtonRaphsonSolver` (`math::solvers`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other workspace crates:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use credit_core::market_data::curves::{CreditCurve, NelsonSiegelCurve, PiecewiseHazardCurve, YieldCurve};
//! use credit_core::types::{Date, DayCountConvention};
//!
//! // Date operations
//! let start = Date::from_ymd(2014, 2, 28).unwrap();
//! let end = Date::from_ymd(2015, 3, 20).unwrap();
//! let t = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//!
//! // Discounting
//! let discount = NelsonSiegelCurve::new(0.0408_f64, -0.0396, -0.0511, 1.614).unwrap();
//! let df = discount.discount_factor(t).unwrap();
//! assert!(df > 0.99 && df < 1.0);
//!
//! // Survival
//! let curve = PiecewiseHazardCurve::new(&[0.0, 1.0, 3.0], &[0.01, 0.02]).unwrap();
//! let q = curve.survival_probability(2.0).unwrap();
//! assert!((q - (-0.03_f64).exp()).abs() < 1e-14);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and the date conventions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
