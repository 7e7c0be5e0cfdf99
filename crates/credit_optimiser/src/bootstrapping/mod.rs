//! Hazard-rate bootstrapping from CDS par spreads.
//!
//! ## Architecture
//!
//! - `CdsQuote<T>`: one calibration instrument (maturity, spread, recovery, schedule)
//! - `HazardBootstrapConfig<T>`: tolerance, iteration cap, seed, and negative-hazard policy
//! - `HazardBootstrapper<T>`: the sequential engine
//! - `HazardBootstrapResult<T>`: immutable curve snapshot plus per-knot diagnostics
//!
//! Knots are solved strictly in increasing maturity order. Knot `m` only sees
//! hazards `h[0..m]`, so each solve is one-dimensional in `h[m-1]`.

mod config;
mod engine;
mod error;
mod instrument;
mod result;

pub use config::{HazardBootstrapConfig, HazardBootstrapConfigBuilder};
pub use engine::HazardBootstrapper;
pub use error::BootstrapError;
pub use instrument::CdsQuote;
pub use result::{BootstrapStatus, BootstrapWarning, HazardBootstrapResult};
