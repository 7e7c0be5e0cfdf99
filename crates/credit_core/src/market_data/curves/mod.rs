//! Curve abstractions for discounting and default risk.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate calculations
//! - [`FlatCurve`]: Constant rate yield curve implementation
//! - [`NelsonSiegelCurve`]: Closed-form Nelson-Siegel zero curve
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability calculations
//! - [`PiecewiseHazardCurve`]: Piecewise-constant hazard curve on a knot set
//! - [`FlatHazardRateCurve`]: Constant hazard rate curve implementation

mod credit;
mod flat;
mod nelson_siegel;
mod traits;

pub use credit::{CreditCurve, FlatHazardRateCurve, PiecewiseHazardCurve};
pub use flat::FlatCurve;
pub use nelson_siegel::NelsonSiegelCurve;
pub use traits::YieldCurve;
