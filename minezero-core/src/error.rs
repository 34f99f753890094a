//! Error handling for the MineZero calculator.
//!
//! The calculator refuses to compute rather than return `NaN` or `Infinity`,
//! so every rejected precondition surfaces as a [`CalculatorError`].

use thiserror::Error;

/// Main error type for MineZero calculations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculatorError {
    /// An input violated a precondition (non-positive production, target, etc.)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A report could not be serialized
    #[error("Report error: {0}")]
    Report(String),
}

/// Result type alias for MineZero operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

impl CalculatorError {
    /// Shorthand for a validation failure on a named field
    pub fn invalid(field: &str, value: f64, requirement: &str) -> Self {
        CalculatorError::Validation(format!("{field} must be {requirement}, got {value}"))
    }

    /// Whether this error was caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, CalculatorError::Validation(_))
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        CalculatorError::Report(err.to_string())
    }
}
