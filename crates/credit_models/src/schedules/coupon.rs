//! CDS coupon schedule and its builder.

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::payment::PaymentSchedule;
use credit_core::market_data::curves::YieldCurve;
use credit_core::types::{BusinessDayConvention, Date, DayCountConvention};
use num_traits::Float;

/// Dated coupon schedule of one CDS contract.
///
/// Holds the payment dates strictly after the trade date (the last one is
/// the unadjusted maturity) and the previous coupon date on or before the
/// trade date.
///
/// # Examples
///
/// ```
/// use credit_models::schedules::CdsScheduleBuilder;
/// use credit_core::types::Date;
///
/// let schedule = CdsScheduleBuilder::new()
///     .trade_date(Date::from_ymd(2014, 2, 28).unwrap())
///     .maturity(Date::from_ymd(2042, 5, 15).unwrap())
///     .roll_day(15)
///     .build()
///     .unwrap();
///
/// // 2014-02-15 was a Saturday
/// assert_eq!(schedule.previous_coupon_date(), Date::from_ymd(2014, 2, 17).unwrap());
/// assert!((schedule.previous_accrual() - 11.0 / 360.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CouponSchedule {
    trade_date: Date,
    maturity: Date,
    previous_coupon: Date,
    payment_dates: Vec<Date>,
    accrual_day_count: DayCountConvention,
    time_day_count: DayCountConvention,
}

impl CouponSchedule {
    /// Trade (valuation) date.
    #[inline]
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Unadjusted maturity date.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity
    }

    /// Adjusted coupon date on or before the trade date.
    #[inline]
    pub fn previous_coupon_date(&self) -> Date {
        self.previous_coupon
    }

    /// Payment dates after the trade date, ending with the maturity.
    #[inline]
    pub fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    /// Number of remaining payments.
    #[inline]
    pub fn len(&self) -> usize {
        self.payment_dates.len()
    }

    /// Always false for a built schedule; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payment_dates.is_empty()
    }

    /// Payment times from the trade date, leading zero included.
    pub fn payment_times(&self) -> Vec<f64> {
        std::iter::once(0.0)
            .chain(
                self.payment_dates
                    .iter()
                    .map(|&d| self.time_day_count.year_fraction_dates(self.trade_date, d)),
            )
            .collect()
    }

    /// Accrual fraction of each period; the first runs from the trade date.
    pub fn accrual_fractions(&self) -> Vec<f64> {
        let mut start = self.trade_date;
        self.payment_dates
            .iter()
            .map(|&end| {
                let fraction = self.accrual_day_count.year_fraction_dates(start, end);
                start = end;
                fraction
            })
            .collect()
    }

    /// Time from the trade date to maturity.
    pub fn maturity_time(&self) -> f64 {
        self.time_day_count
            .year_fraction_dates(self.trade_date, self.maturity)
    }

    /// Accrual from the previous coupon date to the trade date.
    ///
    /// Never negative: the previous coupon is the last one paid on or before
    /// the trade date.
    pub fn previous_accrual(&self) -> f64 {
        self.accrual_day_count
            .year_fraction_dates(self.previous_coupon, self.trade_date)
    }

    /// Convert to the numeric schedule the leg integrators consume.
    pub fn payment_schedule<T, D>(&self, discount: &D) -> Result<PaymentSchedule<T>, ScheduleError>
    where
        T: Float,
        D: YieldCurve<T>,
    {
        let times = self
            .payment_times()
            .into_iter()
            .map(to_float)
            .collect::<Result<Vec<T>, _>>()?;
        let intervals = self
            .accrual_fractions()
            .into_iter()
            .map(to_float)
            .collect::<Result<Vec<T>, _>>()?;
        PaymentSchedule::new(times, intervals, discount)
    }
}

fn to_float<T: Float>(x: f64) -> Result<T, ScheduleError> {
    T::from(x).ok_or_else(|| ScheduleError::DateOverflow {
        reason: format!("year fraction {} not representable", x),
    })
}

/// Builder for CDS coupon schedules.
///
/// Coupon dates roll back from maturity by the frequency on `roll_day`
/// (clamped to month end) while they are paid strictly after the trade date,
/// so a roll date on or before the trade date whose adjusted payment falls
/// after it is still a payment.
/// Payment dates are adjusted with the business-day convention, except the
/// maturity itself which stays unadjusted.
///
/// Defaults: quarterly, modified following, ACT/360 accruals, ACT/365 times,
/// roll day taken from the maturity date.
#[derive(Debug, Clone)]
pub struct CdsScheduleBuilder {
    trade_date: Option<Date>,
    maturity: Option<Date>,
    roll_day: Option<u32>,
    frequency: Frequency,
    business_day: BusinessDayConvention,
    accrual_day_count: DayCountConvention,
    time_day_count: DayCountConvention,
}

impl Default for CdsScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CdsScheduleBuilder {
    /// Creates a builder with market-standard defaults.
    pub fn new() -> Self {
        Self {
            trade_date: None,
            maturity: None,
            roll_day: None,
            frequency: Frequency::default(),
            business_day: BusinessDayConvention::default(),
            accrual_day_count: DayCountConvention::ActualActual360,
            time_day_count: DayCountConvention::ActualActual365,
        }
    }

    /// Sets the trade date.
    pub fn trade_date(mut self, date: Date) -> Self {
        self.trade_date = Some(date);
        self
    }

    /// Sets the maturity date.
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the day of month coupons roll on.
    pub fn roll_day(mut self, day: u32) -> Self {
        self.roll_day = Some(day);
        self
    }

    /// Sets the coupon frequency.
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = freq;
        self
    }

    /// Sets the business-day convention for coupon dates.
    pub fn business_day(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day = convention;
        self
    }

    /// Sets the day count for accrual fractions.
    pub fn accrual_day_count(mut self, dc: DayCountConvention) -> Self {
        self.accrual_day_count = dc;
        self
    }

    /// Sets the day count for payment times.
    pub fn time_day_count(mut self, dc: DayCountConvention) -> Self {
        self.time_day_count = dc;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// - `MissingField` when the trade date or maturity is missing
    /// - `InvalidDateRange` unless the trade date precedes maturity
    /// - `InvalidRollDay` for a roll day outside 1..=31
    /// - `DateOverflow` if rolling leaves the calendar range
    pub fn build(self) -> Result<CouponSchedule, ScheduleError> {
        let trade_date = self
            .trade_date
            .ok_or(ScheduleError::MissingField { field: "trade_date" })?;
        let maturity = self
            .maturity
            .ok_or(ScheduleError::MissingField { field: "maturity" })?;

        if trade_date >= maturity {
            return Err(ScheduleError::InvalidDateRange {
                start: trade_date,
                end: maturity,
            });
        }

        let roll_day = self.roll_day.unwrap_or_else(|| maturity.day());
        if !(1..=31).contains(&roll_day) {
            return Err(ScheduleError::InvalidRollDay { day: roll_day });
        }

        let step = self.frequency.months_between_payments();
        let mut rolled = Vec::new();
        let mut months_back = step;
        let previous_unadjusted = loop {
            let date = roll_back(maturity, months_back, roll_day)?;
            if self.business_day.adjust(date) <= trade_date {
                break date;
            }
            rolled.push(date);
            months_back += step;
        };

        let mut payment_dates: Vec<Date> = rolled
            .into_iter()
            .rev()
            .map(|d| self.business_day.adjust(d))
            .filter(|&d| d > trade_date && d < maturity)
            .collect();
        payment_dates.dedup();
        payment_dates.push(maturity);

        Ok(CouponSchedule {
            trade_date,
            maturity,
            previous_coupon: self.business_day.adjust(previous_unadjusted),
            payment_dates,
            accrual_day_count: self.accrual_day_count,
            time_day_count: self.time_day_count,
        })
    }
}

/// `months` calendar months before `from`, on `roll_day` clamped to month end.
fn roll_back(from: Date, months: u32, roll_day: u32) -> Result<Date, ScheduleError> {
    let index = from.year() as i64 * 12 + (from.month() as i64 - 1) - months as i64;
    let year = i32::try_from(index.div_euclid(12)).map_err(|_| ScheduleError::DateOverflow {
        reason: format!("rolling {} months back from {}", months, from),
    })?;
    let month = (index.rem_euclid(12) + 1) as u32;
    Ok(Date::from_ymd_clamped(year, month, roll_day)?)
}
