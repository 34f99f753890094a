//! Input Validation Module
//!
//! Precondition checks shared by the calculator and its helpers. Divisors
//! (production, target intensity) are rejected unless strictly positive and
//! finite; activity quantities are clamped to zero when negative.

use tracing::warn;

use crate::error::{CalculatorError, CalculatorResult};

/// Require a strictly positive, finite value
///
/// # Arguments
/// * `field` - Name reported in the error message
/// * `value` - Value to check
///
/// # Returns
/// * `Ok(value)` - Value is usable as a divisor
/// * `Err(CalculatorError::Validation)` - Zero, negative, NaN or infinite
pub fn require_positive(field: &str, value: f64) -> CalculatorResult<f64> {
    if !value.is_finite() {
        warn!(field, value, "rejecting non-finite input");
        return Err(CalculatorError::invalid(field, value, "a finite number"));
    }
    if value <= 0.0 {
        warn!(field, value, "rejecting non-positive input");
        return Err(CalculatorError::invalid(field, value, "greater than zero"));
    }
    Ok(value)
}

/// Require a non-negative, finite value
pub fn require_non_negative(field: &str, value: f64) -> CalculatorResult<f64> {
    if !value.is_finite() {
        warn!(field, value, "rejecting non-finite input");
        return Err(CalculatorError::invalid(field, value, "a finite number"));
    }
    if value < 0.0 {
        warn!(field, value, "rejecting negative input");
        return Err(CalculatorError::invalid(field, value, "zero or greater"));
    }
    Ok(value)
}

/// Clamp a negative activity quantity to zero.
///
/// NaN is passed through untouched so that it propagates to the outputs.
pub fn clamp_non_negative(field: &str, value: f64) -> f64 {
    if value < 0.0 {
        warn!(field, value, "clamping negative activity quantity to zero");
        0.0
    } else {
        value
    }
}
