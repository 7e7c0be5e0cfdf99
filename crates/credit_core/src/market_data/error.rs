//! Market data error types.
//!
//! This module provides structured error handling for curve construction
//! and curve queries.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative or non-finite time
/// - `InsufficientData`: Not enough points for construction
/// - `LengthMismatch`: Knot and rate arrays disagree in length
/// - `NonMonotonicKnots`: Knots not strictly increasing
/// - `InvalidParameter`: A curve parameter outside its valid domain
/// - `SegmentOutOfRange`: Hazard segment index beyond the curve
///
/// # Examples
///
/// ```
/// use credit_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative or non-finite time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knot and rate arrays have inconsistent lengths.
    #[error("Length mismatch: {knots} knots require {expected} hazard rates, got {rates}")]
    LengthMismatch {
        /// Number of knots supplied (including the origin)
        knots: usize,
        /// Number of rates expected
        expected: usize,
        /// Number of rates supplied
        rates: usize,
    },

    /// Knots are not strictly increasing from zero.
    #[error("Knots must start at 0 and be strictly increasing: violation at index {index} (t = {t})")]
    NonMonotonicKnots {
        /// Index of the offending knot
        index: usize,
        /// Value of the offending knot
        t: f64,
    },

    /// Curve parameter outside its valid domain.
    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Hazard segment index beyond the curve.
    #[error("Segment {segment} out of range for curve with {segments} segments")]
    SegmentOutOfRange {
        /// Requested segment
        segment: usize,
        /// Number of segments on the curve
        segments: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
