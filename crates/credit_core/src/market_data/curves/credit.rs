//! Credit curve abstractions for survival and hazard calculations.
//!
//! This module provides:
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability calculations
//! - [`PiecewiseHazardCurve`]: Flat-per-period hazard curve on a maturity knot set
//! - [`FlatHazardRateCurve`]: Constant hazard curve used as a closed-form reference

use super::traits::check_time;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic credit curve trait for hazard rate and survival probability calculations.
///
/// All implementations are generic over `T: Float`.
///
/// # Contract
///
/// - `hazard_rate(t)` returns the instantaneous hazard rate λ(t) at time t
/// - `survival_probability(t)` returns Q(t) = P(τ > t) = exp(-∫₀ᵗ λ(s)ds)
/// - `default_probability(t)` returns P(τ ≤ t) = 1 - Q(t)
///
/// # Invariants
///
/// - Q(0) = 1
/// - Q is non-increasing in t whenever λ ≥ 0
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{CreditCurve, PiecewiseHazardCurve};
///
/// let curve = PiecewiseHazardCurve::new(&[0.0_f64, 1.0, 2.0, 5.0], &[0.01, 0.012, 0.015]).unwrap();
///
/// let surv = curve.survival_probability(1.0).unwrap();
/// assert!(surv > 0.98 && surv < 1.0);
/// ```
pub trait CreditCurve<T: Float> {
    /// Return the instantaneous hazard rate at time `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the survival probability Q(t) = P(τ > t).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn survival_probability(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the default probability P(τ ≤ t).
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// P(τ ≤ t) = 1 - Q(t)
    /// ```
    fn default_probability(&self, t: T) -> Result<T, MarketDataError> {
        Ok(T::one() - self.survival_probability(t)?)
    }

    /// Return the forward survival probability P(τ > t2 | τ > t1).
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// P(τ > t2 | τ > t1) = Q(t2) / Q(t1)
    /// ```
    fn forward_survival_probability(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        let s1 = self.survival_probability(t1)?;
        let s2 = self.survival_probability(t2)?;
        Ok(s2 / s1)
    }
}

/// Piecewise-constant hazard curve.
///
/// Knots `maturity[0..=M]` start at zero and are strictly increasing. The
/// hazard vector `h[0..M]` assigns `h[i]` to the half-open segment
/// `(maturity[i], maturity[i+1]]`; beyond the last knot the curve
/// extrapolates flat with `h[M-1]`.
///
/// # Mathematical Model
///
/// For `maturity[k-1] < t <= maturity[k]`:
///
/// ```text
/// Q(t) = exp(-( Σ_{i<k-1} (maturity[i+1] - maturity[i]) h[i] + (t - maturity[k-1]) h[k-1] ))
/// ```
///
/// The survival function is continuous at every knot. Negative hazards are
/// representable (a calibration can produce them) but callers can detect them
/// with [`first_negative`](Self::first_negative).
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{CreditCurve, PiecewiseHazardCurve};
///
/// let curve = PiecewiseHazardCurve::new(&[0.0_f64, 1.0, 3.0], &[0.01, 0.02]).unwrap();
///
/// // Flat extrapolation with the last hazard
/// let q5 = curve.survival_probability(5.0).unwrap();
/// assert!((q5 - (-(0.01 + 0.02 * 4.0_f64)).exp()).abs() < 1e-14);
///
/// // dQ(t)/dh[j] = -Q(t) * exposure(t, j)
/// let dq = curve.survival_sensitivity(2.0, 1).unwrap();
/// let q2 = curve.survival_probability(2.0).unwrap();
/// assert!((dq + q2).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PiecewiseHazardCurve<T: Float> {
    knots: Vec<T>,
    hazard_rates: Vec<T>,
}

impl<T: Float> PiecewiseHazardCurve<T> {
    /// Construct a curve from the full knot set (including the origin) and
    /// one hazard rate per segment.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` when fewer than two knots are given
    /// - `LengthMismatch` unless `hazard_rates.len() == knots.len() - 1`
    /// - `NonMonotonicKnots` when the knots do not start at zero or are not
    ///   strictly increasing and finite
    /// - `InvalidParameter` for a non-finite hazard rate
    pub fn new(knots: &[T], hazard_rates: &[T]) -> Result<Self, MarketDataError> {
        if knots.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: knots.len(),
                need: 2,
            });
        }
        if hazard_rates.len() != knots.len() - 1 {
            return Err(MarketDataError::LengthMismatch {
                knots: knots.len(),
                expected: knots.len() - 1,
                rates: hazard_rates.len(),
            });
        }
        if knots[0] != T::zero() {
            return Err(MarketDataError::NonMonotonicKnots {
                index: 0,
                t: knots[0].to_f64().unwrap_or(f64::NAN),
            });
        }
        for (i, pair) in knots.windows(2).enumerate() {
            if !pair[1].is_finite() || pair[1] <= pair[0] {
                return Err(MarketDataError::NonMonotonicKnots {
                    index: i + 1,
                    t: pair[1].to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for &h in hazard_rates {
            if !h.is_finite() {
                return Err(MarketDataError::InvalidParameter {
                    name: "hazard_rate",
                    value: h.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            knots: knots.to_vec(),
            hazard_rates: hazard_rates.to_vec(),
        })
    }

    /// Construct a curve on the knots `[0, maturities...]` with every segment
    /// set to the same rate.
    ///
    /// This is the starting state of a bootstrap.
    pub fn flat_on(maturities: &[T], rate: T) -> Result<Self, MarketDataError> {
        let mut knots = Vec::with_capacity(maturities.len() + 1);
        knots.push(T::zero());
        knots.extend_from_slice(maturities);
        let rates = vec![rate; maturities.len()];
        Self::new(&knots, &rates)
    }

    /// Full knot set, starting at zero.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// Knots without the origin (the calibration maturities).
    #[inline]
    pub fn maturities(&self) -> &[T] {
        &self.knots[1..]
    }

    /// Hazard vector, one rate per segment.
    #[inline]
    pub fn hazard_rates(&self) -> &[T] {
        &self.hazard_rates
    }

    /// Number of hazard segments M.
    #[inline]
    pub fn segments(&self) -> usize {
        self.hazard_rates.len()
    }

    /// Last knot of the curve.
    #[inline]
    pub fn last_knot(&self) -> T {
        self.knots[self.knots.len() - 1]
    }

    /// Replace the hazard rate of one segment.
    ///
    /// Used by the bootstrap accumulator; everything else treats the curve
    /// as immutable.
    pub fn set_rate(&mut self, segment: usize, rate: T) -> Result<(), MarketDataError> {
        let segments = self.segments();
        match self.hazard_rates.get_mut(segment) {
            Some(slot) => {
                *slot = rate;
                Ok(())
            }
            None => Err(MarketDataError::SegmentOutOfRange { segment, segments }),
        }
    }

    /// Index of the segment containing `t` under half-open semantics.
    ///
    /// `t <= 0` maps to segment 0 and anything beyond the last knot maps to
    /// the last segment.
    pub fn segment_index(&self, t: T) -> usize {
        // Count of interior/right knots strictly below t.
        let below = self.knots[1..].partition_point(|&k| k < t);
        below.min(self.segments() - 1)
    }

    /// Time spent by `[0, t]` inside segment `j`.
    ///
    /// ```text
    /// exposure(t, j) = clamp(t - maturity[j], 0, maturity[j+1] - maturity[j])
    /// ```
    ///
    /// The last segment is unbounded above.
    pub fn segment_exposure(&self, t: T, segment: usize) -> Result<T, MarketDataError> {
        check_time(t)?;
        if segment >= self.segments() {
            return Err(MarketDataError::SegmentOutOfRange {
                segment,
                segments: self.segments(),
            });
        }
        Ok(self.exposure_unchecked(t, segment))
    }

    #[inline]
    fn exposure_unchecked(&self, t: T, segment: usize) -> T {
        let start = self.knots[segment];
        let elapsed = (t - start).max(T::zero());
        if segment + 1 == self.segments() {
            elapsed
        } else {
            elapsed.min(self.knots[segment + 1] - start)
        }
    }

    /// Integrated hazard `∫₀ᵗ λ(s) ds`, accumulated left to right.
    pub fn integrated_hazard(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        let last = self.segment_index(t);
        let mut acc = T::zero();
        for j in 0..=last {
            acc = acc + self.hazard_rates[j] * self.exposure_unchecked(t, j);
        }
        Ok(acc)
    }

    /// Derivative of the survival probability with respect to one hazard.
    ///
    /// ```text
    /// dQ(t)/dh[j] = -Q(t) * exposure(t, j)
    /// ```
    pub fn survival_sensitivity(&self, t: T, segment: usize) -> Result<T, MarketDataError> {
        let exposure = self.segment_exposure(t, segment)?;
        if exposure == T::zero() {
            return Ok(T::zero());
        }
        let q = self.survival_probability(t)?;
        Ok(-q * exposure)
    }

    /// First segment with a negative hazard rate, if any.
    pub fn first_negative(&self) -> Option<(usize, T)> {
        self.hazard_rates
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, h)| h < T::zero())
    }

    /// True when every hazard rate is non-negative.
    #[inline]
    pub fn is_non_negative(&self) -> bool {
        self.first_negative().is_none()
    }
}

impl<T: Float> CreditCurve<T> for PiecewiseHazardCurve<T> {
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        Ok(self.hazard_rates[self.segment_index(t)])
    }

    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok((-self.integrated_hazard(t)?).exp())
    }
}

/// A flat (constant) hazard rate curve.
///
/// ```text
/// Q(t) = exp(-λ t)
/// ```
///
/// # Example
///
/// ```
/// use credit_core::market_data::curves::{CreditCurve, FlatHazardRateCurve};
///
/// let curve = FlatHazardRateCurve::new(0.01_f64);
/// let surv = curve.survival_probability(5.0).unwrap();
/// assert!((surv - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatHazardRateCurve<T: Float> {
    hazard_rate: T,
}

impl<T: Float> FlatHazardRateCurve<T> {
    /// Construct a flat hazard rate curve.
    #[inline]
    pub fn new(hazard_rate: T) -> Self {
        Self { hazard_rate }
    }

    /// Return the constant hazard rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.hazard_rate
    }
}

impl<T: Float> CreditCurve<T> for FlatHazardRateCurve<T> {
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        Ok(self.hazard_rate)
    }

    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        check_time(t)?;
        Ok((-self.hazard_rate * t).exp())
    }
}
