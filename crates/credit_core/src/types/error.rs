//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from valuation operations
//! - `DateError`: Errors from date construction and parsing
//! - `SolverError`: Errors from root-finding solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for valuation operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid contract terms or market data
/// - `NumericalInstability`: A computation produced a non-finite value
/// - `ModelFailure`: Model assumptions violated (e.g. negative hazard rates)
///
/// # Examples
/// ```
/// use credit_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("recovery rate 1.2 outside [0, 1]".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: recovery rate 1.2 outside [0, 1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Model failed to produce valid result
    ModelFailure(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `Overflow`: Date arithmetic left the representable range
///
/// # Examples
/// ```
/// use credit_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2014, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2014-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),

    /// Date arithmetic overflowed.
    Overflow(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
            DateError::Overflow(msg) => write!(f, "Date overflow: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Root-finding solver errors.
///
/// Every variant carries enough state to diagnose the failed solve:
/// the last iterate and, where available, the last residual.
///
/// # Examples
///
/// ```
/// use credit_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, x: 0.02, residual: 1e-4 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations (x = {x}, residual = {residual})")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Last iterate
        x: f64,
        /// Residual at the last iterate
        residual: f64,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}: f'(x) = {derivative}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
        /// The offending derivative value
        derivative: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl SolverError {
    /// Check if this is an iteration limit failure.
    pub fn is_max_iterations(&self) -> bool {
        matches!(self, Self::MaxIterationsExceeded { .. })
    }

    /// Check if this is a near-zero derivative failure.
    pub fn is_derivative_near_zero(&self) -> bool {
        matches!(self, Self::DerivativeNearZero { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PricingError tests

    #[test]
    fn test_pricing_error_invalid_input_display() {
        let err = PricingError::InvalidInput("empty schedule".to_string());
        assert_eq!(format!("{}", err), "Invalid input: empty schedule");
    }

    #[test]
    fn test_pricing_error_model_failure_display() {
        let err = PricingError::ModelFailure("negative hazard at segment 3".to_string());
        assert_eq!(
            format!("{}", err),
            "Model failure: negative hazard at segment 3"
        );
    }

    #[test]
    fn test_pricing_error_numerical_instability_display() {
        let err = PricingError::NumericalInstability("NaN premium".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: NaN premium");
    }

    #[test]
    fn test_pricing_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    // DateError tests

    #[test]
    fn test_date_error_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2014,
            month: 13,
            day: 1,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2014-13-1");
    }

    #[test]
    fn test_date_error_parse_display() {
        let err = DateError::ParseError("input contains invalid characters".to_string());
        assert!(format!("{}", err).starts_with("Date parse error"));
    }

    #[test]
    fn test_date_error_overflow_display() {
        let err = DateError::Overflow("adding 3 months".to_string());
        assert_eq!(format!("{}", err), "Date overflow: adding 3 months");
    }

    // SolverError tests

    #[test]
    fn test_solver_error_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded {
            iterations: 25,
            x: 0.5,
            residual: 0.25,
        };
        assert_eq!(
            format!("{}", err),
            "Failed to converge after 25 iterations (x = 0.5, residual = 0.25)"
        );
        assert!(err.is_max_iterations());
        assert!(!err.is_derivative_near_zero());
    }

    #[test]
    fn test_solver_error_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero {
            x: 1.5,
            derivative: 0.0,
        };
        assert_eq!(format!("{}", err), "Derivative near zero at x = 1.5: f'(x) = 0");
        assert!(err.is_derivative_near_zero());
    }

    #[test]
    fn test_solver_error_clone_and_equality() {
        let err1 = SolverError::NumericalInstability("inf".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
