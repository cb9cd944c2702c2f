// ============================================================================
// Equation Errors
// Error types for equation construction and exact-decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or solving a quadratic equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquationError {
    /// Coefficient set did not hold exactly `expected` entries
    InvalidCoefficientCount { expected: usize, got: usize },
    /// Keyed coefficient set lacked one of `a`, `b`, `c`
    MissingCoefficient { key: &'static str },
    /// Input text or float has no exact decimal form
    UnparseableCoefficient { input: String },
    /// Leading coefficient is exactly zero
    ZeroLeadingCoefficient,
    /// Result exceeded the decimal range
    Overflow,
    /// Exact result needs more digits than a decimal can hold
    PrecisionLoss,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::InvalidCoefficientCount { expected, got } => {
                write!(f, "need {} coefficients, got {}", expected, got)
            },
            EquationError::MissingCoefficient { key } => {
                write!(f, "missing coefficient '{}'", key)
            },
            EquationError::UnparseableCoefficient { input } => {
                write!(f, "invalid coefficient: could not parse '{}'", input)
            },
            EquationError::ZeroLeadingCoefficient => {
                write!(f, "coefficient at the leading term is zero")
            },
            EquationError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            EquationError::PrecisionLoss => write!(
                f,
                "precision loss: exact result would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for EquationError {}

/// Result type alias for equation operations
pub type NumericResult<T> = Result<T, EquationError>;
