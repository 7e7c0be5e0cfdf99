//! Numeric payment schedule consumed by the leg integrators.

use super::error::ScheduleError;
use credit_core::market_data::curves::YieldCurve;
use num_traits::Float;

/// Payment times, accrual fractions and discounted accruals of one contract.
///
/// For `N` payments:
///
/// ```text
/// time_to_pmt[0..=N]      time_to_pmt[0] = 0, strictly increasing
/// interval[1..=N]         stored at index i - 1
/// interval_mult_z[0..N]   interval_mult_z[i - 1] = interval[i] * Z(time_to_pmt[i])
/// ```
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::FlatCurve;
/// use credit_models::schedules::PaymentSchedule;
///
/// let discount = FlatCurve::new(0.0_f64);
/// let schedule = PaymentSchedule::new(vec![0.0, 0.25, 0.5], vec![0.25, 0.25], &discount).unwrap();
/// assert_eq!(schedule.payments(), 2);
/// assert_eq!(schedule.interval_mult_z(), &[0.25, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSchedule<T: Float> {
    time_to_pmt: Vec<T>,
    intervals: Vec<T>,
    interval_mult_z: Vec<T>,
}

impl<T: Float> PaymentSchedule<T> {
    /// Build a schedule, discounting each accrual fraction with `discount`.
    pub fn new<D: YieldCurve<T>>(
        time_to_pmt: Vec<T>,
        intervals: Vec<T>,
        discount: &D,
    ) -> Result<Self, ScheduleError> {
        validate_times(&time_to_pmt)?;
        check_len("intervals", time_to_pmt.len() - 1, intervals.len())?;

        let mut interval_mult_z = Vec::with_capacity(intervals.len());
        for (i, &interval) in intervals.iter().enumerate() {
            let z = discount.discount_factor(time_to_pmt[i + 1])?;
            interval_mult_z.push(interval * z);
        }
        Self::from_parts(time_to_pmt, intervals, interval_mult_z)
    }

    /// Assemble a schedule from precomputed parts.
    ///
    /// # Errors
    ///
    /// - `InvalidPaymentTimes` unless times start at 0 and increase strictly
    /// - `LengthMismatch` unless both per-period arrays have `N` entries
    /// - `InvalidAccrual` for a negative or non-finite accrual fraction
    pub fn from_parts(
        time_to_pmt: Vec<T>,
        intervals: Vec<T>,
        interval_mult_z: Vec<T>,
    ) -> Result<Self, ScheduleError> {
        validate_times(&time_to_pmt)?;
        let payments = time_to_pmt.len() - 1;
        check_len("intervals", payments, intervals.len())?;
        check_len("interval_mult_z", payments, interval_mult_z.len())?;

        for (i, &interval) in intervals.iter().enumerate() {
            if !interval.is_finite() || interval < T::zero() {
                return Err(ScheduleError::InvalidAccrual {
                    period: i + 1,
                    value: interval.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            time_to_pmt,
            intervals,
            interval_mult_z,
        })
    }

    /// Payment times including the leading zero.
    #[inline]
    pub fn time_to_pmt(&self) -> &[T] {
        &self.time_to_pmt
    }

    /// Accrual fractions, `interval[i]` at index `i - 1`.
    #[inline]
    pub fn intervals(&self) -> &[T] {
        &self.intervals
    }

    /// Discounted accrual fractions, `interval[i] * Z(t_i)` at index `i - 1`.
    #[inline]
    pub fn interval_mult_z(&self) -> &[T] {
        &self.interval_mult_z
    }

    /// Number of payments N.
    #[inline]
    pub fn payments(&self) -> usize {
        self.intervals.len()
    }

    /// Time of the final payment.
    #[inline]
    pub fn maturity(&self) -> T {
        self.time_to_pmt[self.time_to_pmt.len() - 1]
    }

    /// Time of the first payment, `time_to_pmt[1]`.
    #[inline]
    pub fn first_payment_time(&self) -> T {
        self.time_to_pmt[1]
    }
}

fn validate_times<T: Float>(times: &[T]) -> Result<(), ScheduleError> {
    if times.len() < 2 {
        return Err(ScheduleError::LengthMismatch {
            what: "time_to_pmt",
            expected: 2,
            got: times.len(),
        });
    }
    if times[0] != T::zero() {
        return Err(ScheduleError::InvalidPaymentTimes {
            index: 0,
            t: times[0].to_f64().unwrap_or(f64::NAN),
        });
    }
    for (i, pair) in times.windows(2).enumerate() {
        if !pair[1].is_finite() || pair[1] <= pair[0] {
            return Err(ScheduleError::InvalidPaymentTimes {
                index: i + 1,
                t: pair[1].to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<(), ScheduleError> {
    if expected != got {
        return Err(ScheduleError::LengthMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
