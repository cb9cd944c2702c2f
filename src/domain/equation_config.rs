// ============================================================================
// Equation Configuration
// Variable naming and right-hand side shared by every construction path
// ============================================================================

use crate::numeric::{IntoCoefficient, NumericResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name used for the unknown when none is given
pub const DEFAULT_VARIABLE: &str = "x";

/// Presentation options for a quadratic equation.
///
/// `answer` is the right-hand side. `None` renders and solves as `= 0`;
/// `Some(0)` is kept as an explicit zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquationConfig {
    /// Display name of the unknown (e.g. "x", "z", "qwe")
    pub variable: String,

    /// Optional explicit right-hand side
    pub answer: Option<Decimal>,
}

impl EquationConfig {
    /// Create a configuration for the given variable with no explicit answer
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            answer: None,
        }
    }

    /// Builder method: Set the variable name
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Builder method: Set an explicit right-hand side
    ///
    /// # Errors
    /// Returns `UnparseableCoefficient` if the answer has no exact decimal form.
    pub fn with_answer(mut self, answer: impl IntoCoefficient) -> NumericResult<Self> {
        self.answer = Some(answer.into_coefficient()?);
        Ok(self)
    }

    /// Right-hand side value, zero when absent
    pub fn rhs(&self) -> Decimal {
        self.answer.unwrap_or(Decimal::ZERO)
    }
}

impl Default for EquationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE)
    }
}
