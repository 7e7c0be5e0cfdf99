//! Schedule generation for CDS contracts.
//!
//! This module provides:
//! - [`CdsScheduleBuilder`]: Rolls coupon dates back from maturity
//! - [`CouponSchedule`]: Dated coupon schedule with the previous coupon date
//! - [`PaymentSchedule`]: Numeric schedule (times, accruals, discounted accruals)
//! - [`Frequency`]: Coupon frequency
//!
//! # Examples
//!
//! ```
//! use credit_models::schedules::{CdsScheduleBuilder, Frequency};
//! use credit_core::types::Date;
//!
//! let schedule = CdsScheduleBuilder::new()
//!     .trade_date(Date::from_ymd(2014, 2, 28).unwrap())
//!     .maturity(Date::from_ymd(2015, 3, 20).unwrap())
//!     .roll_day(20)
//!     .frequency(Frequency::Quarterly)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schedule.len(), 5);
//! assert_eq!(schedule.previous_coupon_date(), Date::from_ymd(2013, 12, 20).unwrap());
//! ```

mod coupon;
mod error;
mod frequency;
mod payment;

pub use coupon::{CdsScheduleBuilder, CouponSchedule};
pub use error::ScheduleError;
pub use frequency::Frequency;
pub use payment::PaymentSchedule;
