//! Credit default swap valuation.
//!
//! This module provides:
//! - [`CdsTerms`], [`StandardCds`], [`NonStandardCds`]: Contract definitions
//! - [`IntegrationPartition`], [`PartitionCache`]: Protection-leg time grids
//! - [`legs`]: Protection and premium leg values and their hazard derivatives
//! - [`CdsPricer`], [`CdsValuation`]: Valuation facade and its result
//!
//! # Architecture
//!
//! Standard contracts (the calibration instruments) are identified by their
//! knot index `m` and reuse the partition cached for that knot. Non-standard
//! contracts carry the accrual since their previous coupon, get a fresh
//! partition per valuation and pay a stub on their first coupon.
//!
//! # Examples
//!
//! ```
//! use credit_core::market_data::curves::{FlatCurve, PiecewiseHazardCurve};
//! use credit_models::instruments::credit::{CdsPricer, CdsTerms, PartitionCache, StandardCds};
//! use credit_models::schedules::PaymentSchedule;
//!
//! let discount = FlatCurve::new(0.02_f64);
//! let schedule = PaymentSchedule::new(
//!     vec![0.0, 0.25, 0.5, 0.75, 1.0],
//!     vec![0.25; 4],
//!     &discount,
//! ).unwrap();
//! let curve = PiecewiseHazardCurve::flat_on(&[1.0], 0.02).unwrap();
//! let cache = PartitionCache::build(&[1.0], &discount).unwrap();
//!
//! let contract = StandardCds::new(CdsTerms::new(0.012, 0.4, schedule).unwrap(), 1).unwrap();
//! let pricer = CdsPricer::new(&discount, &curve).unwrap();
//! let valuation = pricer.value_standard(&contract, &cache).unwrap();
//!
//! // A flat 2% hazard with 40% recovery is worth about 120bp running
//! assert!((valuation.par_spread - 0.012).abs() < 2e-4);
//! assert_eq!(valuation.accrued, 0.0);
//! ```

mod cds;
pub mod legs;
mod partition;
mod pricing;

pub use cds::{CdsTerms, NonStandardCds, StandardCds};
pub use partition::{IntegrationPartition, PartitionCache};
pub use pricing::{CdsPricer, CdsValuation};
