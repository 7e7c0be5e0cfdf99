//! # credit_models (L2: Instruments and Valuation)
//!
//! CDS contracts, their schedules, and the leg integrators that value them
//! against a discount curve and a piecewise hazard curve.
//!
//! This crate provides:
//! - Coupon schedule generation (`schedules`)
//! - Numeric payment schedules consumed by the leg integrators
//! - Integration partitions and the immutable `PartitionCache`
//! - Protection and premium leg values with analytic hazard derivatives
//! - The `CdsPricer` valuation facade
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** like every numeric type in the workspace
//! - **Strictly left-to-right summation** inside each leg
//! - **Parallelism only across contracts** (`parallel` feature)
//!
//! ## Example
//!
//! ```
//! use credit_core::market_data::curves::{FlatCurve, PiecewiseHazardCurve};
//! use credit_core::types::Date;
//! use credit_models::instruments::credit::{CdsPricer, CdsTerms, NonStandardCds};
//! use credit_models::schedules::CdsScheduleBuilder;
//!
//! let discount = FlatCurve::new(0.02_f64);
//! let coupons = CdsScheduleBuilder::new()
//!     .trade_date(Date::from_ymd(2014, 2, 28).unwrap())
//!     .maturity(Date::from_ymd(2019, 3, 20).unwrap())
//!     .roll_day(20)
//!     .build()
//!     .unwrap();
//! let schedule = coupons.payment_schedule(&discount).unwrap();
//!
//! let curve = PiecewiseHazardCurve::flat_on(&[schedule.maturity()], 0.02).unwrap();
//! let terms = CdsTerms::new(0.01, 0.4, schedule).unwrap();
//! let contract = NonStandardCds::new(terms, coupons.previous_accrual()).unwrap();
//!
//! let pricer = CdsPricer::new(&discount, &curve).unwrap();
//! let valuation = pricer.value_non_standard(&contract).unwrap();
//! assert!(valuation.protection_leg > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod schedules;
