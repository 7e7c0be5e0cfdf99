//! Time types and date conventions for CDS schedules.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions (ACT/365, ACT/360, 30/360)
//! - `BusinessDayConvention`: Weekend roll rules (Following, Modified Following, ...)
//!
//! # Examples
//!
//! ```
//! use credit_core::types::time::{BusinessDayConvention, Date, DayCountConvention};
//!
//! let trade = Date::from_ymd(2014, 2, 28).unwrap();
//! let coupon = Date::from_ymd(2014, 3, 20).unwrap();
//!
//! // Time offset from trade date (ACT/365) and accrual fraction (ACT/360)
//! let t = DayCountConvention::ActualActual365.year_fraction_dates(trade, coupon);
//! let accrual = DayCountConvention::ActualActual360.year_fraction_dates(trade, coupon);
//! assert!((t - 20.0 / 365.0).abs() < 1e-15);
//! assert!((accrual - 20.0 / 360.0).abs() < 1e-15);
//!
//! // Saturday 2014-02-15 rolls forward to Monday
//! let sat = Date::from_ymd(2014, 2, 15).unwrap();
//! let adjusted = BusinessDayConvention::ModifiedFollowing.adjust(sat);
//! assert_eq!(adjusted, Date::from_ymd(2014, 2, 17).unwrap());
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 formatting and the calendar helpers needed by
/// coupon schedule generation.
///
/// # Examples
///
/// ```
/// use credit_core::types::time::Date;
///
/// let date = Date::from_ymd(2042, 5, 15).unwrap();
/// assert_eq!(date.year(), 2042);
/// assert_eq!(date.month(), 5);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2042-05-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2014, 2, 17).unwrap();
/// let end = Date::from_ymd(2014, 2, 28).unwrap();
/// assert_eq!(end - start, 11);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2016, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2014, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Creates a Date, clamping `day` to the last day of the month.
    ///
    /// Coupon schedules roll on a fixed day of month; months shorter than
    /// the roll day pay on their last calendar day.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_core::types::time::Date;
    ///
    /// let d = Date::from_ymd_clamped(2014, 2, 31).unwrap();
    /// assert_eq!(d, Date::from_ymd(2014, 2, 28).unwrap());
    /// ```
    pub fn from_ymd_clamped(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if day == 0 {
            return Err(DateError::InvalidDate { year, month, day });
        }
        let mut d = day.min(31);
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, d) {
                return Ok(Date(date));
            }
            if d <= 28 {
                return Err(DateError::InvalidDate { year, month, day });
            }
            d -= 1;
        }
    }

    /// Parse `YYYY-MM-DD`.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_core::types::time::Date;
    ///
    /// assert_eq!(Date::parse("2014-02-28").unwrap().day(), 28);
    /// assert!(Date::parse("28/02/2014").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Next calendar day, saturating at the end of the representable range.
    pub fn succ(self) -> Self {
        Date(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Previous calendar day, saturating at the start of the representable range.
    pub fn pred(self) -> Self {
        Date(self.0.pred_opt().unwrap_or(self.0))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Signed calendar days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `ActualActual365`: Actual days / 365 (time offsets from the trade date)
/// - `ActualActual360`: Actual days / 360 (CDS premium accrual)
/// - `Thirty360`: Each month treated as 30 days, year as 360 days
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    ActualActual365,

    /// Actual/360: actual_days / 360.0
    ///
    /// Standard accrual basis for CDS premium legs.
    ActualActual360,

    /// 30/360 US Bond Basis
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::ActualActual365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::ActualActual360.name(), "ACT/360");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
            DayCountConvention::ActualActual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2014, 2, 17).unwrap();
    /// let end = Date::from_ymd(2014, 2, 28).unwrap();
    ///
    /// let yf = DayCountConvention::ActualActual360.year_fraction_dates(start, end);
    /// assert!((yf - 11.0 / 360.0).abs() < 1e-15);
    ///
    /// let yf_neg = DayCountConvention::ActualActual360.year_fraction_dates(end, start);
    /// assert!((yf_neg + 11.0 / 360.0).abs() < 1e-15);
    /// ```
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        let days = end - start;

        match self {
            DayCountConvention::ActualActual365 => days as f64 / 365.0,
            DayCountConvention::ActualActual360 => days as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                let (first, second, sign) = if start <= end {
                    (start, end, 1.0)
                } else {
                    (end, start, -1.0)
                };

                let d1 = if first.day() == 31 { 30 } else { first.day() };
                let d2 = if second.day() == 31 && d1 == 30 {
                    30
                } else {
                    second.day()
                };

                let days_30_360 = 360 * (second.year() - first.year())
                    + 30 * (second.month() as i32 - first.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days_30_360 as f64 / 360.0
            }
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// - ACT/365: "ACT/365", "Actual/365", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "A360"
    /// - 30/360: "30/360", "Thirty360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::ActualActual365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::ActualActual360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Business day adjustment convention.
///
/// Weekends are the only non-business days; holiday calendars are not
/// modelled.
///
/// # Examples
///
/// ```
/// use credit_core::types::time::{BusinessDayConvention, Date};
///
/// // Sunday 30 November: following crosses into December, so roll back
/// let sun = Date::from_ymd(2014, 11, 30).unwrap();
/// assert_eq!(
///     BusinessDayConvention::ModifiedFollowing.adjust(sun),
///     Date::from_ymd(2014, 11, 28).unwrap()
/// );
/// assert_eq!(
///     BusinessDayConvention::Following.adjust(sun),
///     Date::from_ymd(2014, 12, 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Move to the next business day.
    Following,

    /// Move to the next business day, unless it crosses a month boundary,
    /// in which case move to the previous business day.
    #[default]
    ModifiedFollowing,

    /// Move to the previous business day.
    Preceding,

    /// Move to the previous business day, unless it crosses a month
    /// boundary, in which case move to the next business day.
    ModifiedPreceding,

    /// Do not adjust the date.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Long name, as displayed.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        }
    }

    /// Short code used in serialised form (`"MF"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Unadjusted => "U",
        }
    }

    /// Adjusts `date` to a business day according to this convention.
    pub fn adjust(&self, date: Date) -> Date {
        match self {
            BusinessDayConvention::Following => following(date),
            BusinessDayConvention::ModifiedFollowing => {
                let rolled = following(date);
                if rolled.month() != date.month() {
                    preceding(date)
                } else {
                    rolled
                }
            }
            BusinessDayConvention::Preceding => preceding(date),
            BusinessDayConvention::ModifiedPreceding => {
                let rolled = preceding(date);
                if rolled.month() != date.month() {
                    following(date)
                } else {
                    rolled
                }
            }
            BusinessDayConvention::Unadjusted => date,
        }
    }
}

fn following(mut date: Date) -> Date {
    while date.is_weekend() {
        date = date.succ();
    }
    date
}

fn preceding(mut date: Date) -> Date {
    while date.is_weekend() {
        date = date.pred();
    }
    date
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = String;

    /// Parses business day convention from string (case-insensitive).
    ///
    /// Supports full names and short codes ("modified following", "mf", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" | "none" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(format!("Unknown business day convention: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BusinessDayConvention, DayCountConvention};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for BusinessDayConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Time offset in years between two dates under ACT/365.
///
/// Negative if `start > end`.
///
/// # Examples
///
/// ```
/// use credit_core::types::time::{Date, time_to_maturity_dates};
///
/// let trade = Date::from_ymd(2014, 2, 28).unwrap();
/// let maturity = Date::from_ymd(2015, 3, 20).unwrap();
/// let t = time_to_maturity_dates(trade, maturity);
/// assert!((t - 385.0 / 365.0).abs() < 1e-15);
/// ```
pub fn time_to_maturity_dates(start: Date, end: Date) -> f64 {
    DayCountConvention::ActualActual365.year_fraction_dates(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    // ========================================
    // Date Tests
    // ========================================

    #[test]
    fn test_date_from_ymd_invalid() {
        let err = Date::from_ymd(2014, 2, 30).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2014,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_date_clamped_to_month_end() {
        assert_eq!(Date::from_ymd_clamped(2014, 4, 31).unwrap(), ymd(2014, 4, 30));
        assert_eq!(Date::from_ymd_clamped(2016, 2, 30).unwrap(), ymd(2016, 2, 29));
        assert_eq!(Date::from_ymd_clamped(2014, 3, 20).unwrap(), ymd(2014, 3, 20));
        assert!(Date::from_ymd_clamped(2014, 3, 0).is_err());
        assert!(Date::from_ymd_clamped(2014, 13, 20).is_err());
    }

    #[test]
    fn test_date_display_and_parse() {
        let date = ymd(2014, 2, 28);
        assert_eq!(date.to_string(), "2014-02-28");
        assert_eq!(Date::parse("2014-02-28").unwrap(), date);
        assert!(matches!(
            Date::parse("2014-02-30"),
            Err(DateError::ParseError(_))
        ));
    }

    #[test]
    fn test_date_weekend() {
        assert!(ymd(2014, 2, 15).is_weekend()); // Saturday
        assert!(ymd(2014, 11, 30).is_weekend()); // Sunday
        assert!(!ymd(2014, 2, 28).is_weekend()); // Friday
    }

    #[test]
    fn test_date_succ_pred() {
        assert_eq!(ymd(2014, 2, 28).succ(), ymd(2014, 3, 1));
        assert_eq!(ymd(2014, 3, 1).pred(), ymd(2014, 2, 28));
    }

    // ========================================
    // Day Count Tests
    // ========================================

    #[test]
    fn test_act_365_and_act_360() {
        let trade = ymd(2014, 2, 28);
        let first = ymd(2014, 5, 15);
        assert_relative_eq!(
            DayCountConvention::ActualActual365.year_fraction_dates(trade, first),
            76.0 / 365.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            DayCountConvention::ActualActual360.year_fraction_dates(trade, first),
            76.0 / 360.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_thirty_360() {
        let start = ymd(2014, 1, 31);
        let end = ymd(2014, 4, 30);
        let yf = DayCountConvention::Thirty360.year_fraction_dates(start, end);
        assert_relative_eq!(yf, 90.0 / 360.0, epsilon = 1e-15);
        let yf_neg = DayCountConvention::Thirty360.year_fraction_dates(end, start);
        assert_relative_eq!(yf_neg, -90.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_day_count_from_str() {
        assert_eq!(
            "act/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActual360
        );
        assert_eq!(
            "A365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActual365
        );
        assert!("ACT/ACT".parse::<DayCountConvention>().is_err());
    }

    // ========================================
    // Business Day Tests
    // ========================================

    #[test]
    fn test_modified_following_weekend_roll() {
        let mf = BusinessDayConvention::ModifiedFollowing;
        assert_eq!(mf.adjust(ymd(2014, 2, 15)), ymd(2014, 2, 17));
        assert_eq!(mf.adjust(ymd(2014, 9, 20)), ymd(2014, 9, 22));
        assert_eq!(mf.adjust(ymd(2014, 3, 20)), ymd(2014, 3, 20));
    }

    #[test]
    fn test_modified_following_month_end() {
        let mf = BusinessDayConvention::ModifiedFollowing;
        // Saturday 31 May 2014 would roll to 2 June
        assert_eq!(mf.adjust(ymd(2014, 5, 31)), ymd(2014, 5, 30));
    }

    #[test]
    fn test_preceding_variants() {
        assert_eq!(
            BusinessDayConvention::Preceding.adjust(ymd(2014, 2, 15)),
            ymd(2014, 2, 14)
        );
        // Saturday 1 March: preceding would land in February
        assert_eq!(
            BusinessDayConvention::ModifiedPreceding.adjust(ymd(2014, 3, 1)),
            ymd(2014, 3, 3)
        );
        assert_eq!(
            BusinessDayConvention::Unadjusted.adjust(ymd(2014, 3, 1)),
            ymd(2014, 3, 1)
        );
    }

    #[test]
    fn test_business_day_from_str() {
        assert_eq!(
            "Modified Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "mf".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!("nearest".parse::<BusinessDayConvention>().is_err());
        assert_eq!(BusinessDayConvention::default().code(), "MF");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[derive(serde::Serialize, serde::Deserialize)]
        struct Conventions {
            date: Date,
            accrual: DayCountConvention,
            roll: BusinessDayConvention,
        }

        #[test]
        fn test_conventions_deserialise_from_names() {
            let parsed: Conventions = serde_json::from_str(
                r#"{"date":"2014-02-28","accrual":"ACT/360","roll":"Modified Following"}"#,
            )
            .unwrap();
            assert_eq!(parsed.date, ymd(2014, 2, 28));
            assert_eq!(parsed.accrual, DayCountConvention::ActualActual360);
            assert_eq!(parsed.roll, BusinessDayConvention::ModifiedFollowing);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = Date> {
            (1990i32..2080, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| ymd(y, m, d))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_adjusted_dates_are_business_days(date in arb_date()) {
                for conv in [
                    BusinessDayConvention::Following,
                    BusinessDayConvention::ModifiedFollowing,
                    BusinessDayConvention::Preceding,
                    BusinessDayConvention::ModifiedPreceding,
                ] {
                    prop_assert!(!conv.adjust(date).is_weekend());
                }
            }

            #[test]
            fn test_modified_following_stays_in_month(date in arb_date()) {
                let adjusted = BusinessDayConvention::ModifiedFollowing.adjust(date);
                prop_assert_eq!(adjusted.month(), date.month());
                prop_assert!((adjusted - date).abs() <= 2);
            }

            #[test]
            fn test_act_day_counts_antisymmetric(a in arb_date(), b in arb_date()) {
                let dc = DayCountConvention::ActualActual360;
                let forward = dc.year_fraction_dates(a, b);
                let backward = dc.year_fraction_dates(b, a);
                prop_assert!((forward + backward).abs() < 1e-12);
            }
        }
    }
}
