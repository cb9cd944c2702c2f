// ============================================================================
// Quadratic Equation Domain Model
// ============================================================================

use super::equation_config::EquationConfig;
use crate::numeric::{EquationError, IntoCoefficient, NumericResult};
use rust_decimal::Decimal;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keys accepted by [`QuadraticEquation::from_map`], in term order
pub const COEFFICIENT_KEYS: [&str; 3] = ["a", "b", "c"];

/// A validated equation `a·v² + b·v + c = answer`.
///
/// - `a` - leading coefficient, never zero
/// - `b` - linear coefficient
/// - `c` - constant term
/// - `variable` - display name of the unknown
/// - `answer` - explicit right-hand side, `None` meaning `0`
///
/// Values are immutable once built; every constructor goes through the
/// same validation, so an instance is always a genuine quadratic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawEquation")
)]
pub struct QuadraticEquation {
    a: Decimal,
    b: Decimal,
    c: Decimal,
    variable: String,
    answer: Option<Decimal>,
}

impl QuadraticEquation {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build `a·v² + b·v + c = 0` from a fixed triple.
    ///
    /// # Errors
    /// - `UnparseableCoefficient` if a coefficient has no exact decimal form
    /// - `ZeroLeadingCoefficient` if `a` is exactly zero
    ///
    /// # Example
    /// ```
    /// use quadratic_equation::prelude::*;
    ///
    /// let eq = QuadraticEquation::new([2.0, 23.0, 5.8], "z").unwrap();
    /// assert_eq!(eq.to_string(), "2z² + 23z + 5.8 = 0");
    /// ```
    pub fn new<C: IntoCoefficient>(
        coefficients: [C; 3],
        variable: impl Into<String>,
    ) -> NumericResult<Self> {
        Self::from_config(coefficients, EquationConfig::new(variable))
    }

    /// Build `a·v² + b·v + c = answer` with an explicit right-hand side.
    ///
    /// An answer of zero is kept and rendered, unlike an omitted one.
    pub fn with_answer<C: IntoCoefficient, A: IntoCoefficient>(
        coefficients: [C; 3],
        answer: A,
        variable: impl Into<String>,
    ) -> NumericResult<Self> {
        let config = EquationConfig::new(variable).with_answer(answer)?;
        Self::from_config(coefficients, config)
    }

    /// Build from a fixed triple and a full configuration
    pub fn from_config<C: IntoCoefficient>(
        coefficients: [C; 3],
        config: EquationConfig,
    ) -> NumericResult<Self> {
        let [a, b, c] = coefficients;
        Self::build(
            a.into_coefficient()?,
            b.into_coefficient()?,
            c.into_coefficient()?,
            config,
        )
    }

    /// Build from a slice that must hold exactly three coefficients.
    ///
    /// # Errors
    /// Returns `InvalidCoefficientCount` for any other length, before
    /// looking at the values.
    pub fn from_slice<C: IntoCoefficient + Clone>(
        coefficients: &[C],
        variable: impl Into<String>,
    ) -> NumericResult<Self> {
        match coefficients {
            [a, b, c] => Self::new([a.clone(), b.clone(), c.clone()], variable),
            _ => Err(Self::reject(EquationError::InvalidCoefficientCount {
                expected: COEFFICIENT_KEYS.len(),
                got: coefficients.len(),
            })),
        }
    }

    /// Build from coefficients keyed by `"a"`, `"b"` and `"c"`.
    ///
    /// # Errors
    /// - `InvalidCoefficientCount` if the map does not hold exactly three entries
    /// - `MissingCoefficient` if one of the three keys is absent
    /// - the usual conversion and leading-term errors
    pub fn from_map<K, C>(
        coefficients: &HashMap<K, C>,
        variable: impl Into<String>,
    ) -> NumericResult<Self>
    where
        K: Borrow<str> + Eq + Hash,
        C: IntoCoefficient + Clone,
    {
        if coefficients.len() != COEFFICIENT_KEYS.len() {
            return Err(Self::reject(EquationError::InvalidCoefficientCount {
                expected: COEFFICIENT_KEYS.len(),
                got: coefficients.len(),
            }));
        }

        let mut values = [Decimal::ZERO; 3];
        for (slot, key) in values.iter_mut().zip(COEFFICIENT_KEYS) {
            let value = coefficients
                .get(key)
                .ok_or_else(|| Self::reject(EquationError::MissingCoefficient { key }))?;
            *slot = value.clone().into_coefficient()?;
        }

        Self::new(values, variable)
    }

    /// Build from three decimal literals such as `"-5.8"`
    pub fn parse_coefficients(
        coefficients: [&str; 3],
        variable: impl Into<String>,
    ) -> NumericResult<Self> {
        Self::new(coefficients, variable)
    }

    fn build(a: Decimal, b: Decimal, c: Decimal, config: EquationConfig) -> NumericResult<Self> {
        if a.is_zero() {
            return Err(Self::reject(EquationError::ZeroLeadingCoefficient));
        }

        tracing::debug!(
            %a,
            %b,
            %c,
            variable = %config.variable,
            answer = ?config.answer,
            "quadratic equation constructed"
        );

        Ok(Self {
            a,
            b,
            c,
            variable: config.variable,
            answer: config.answer,
        })
    }

    fn reject(error: EquationError) -> EquationError {
        tracing::debug!(%error, "quadratic equation rejected");
        error
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Leading coefficient (never zero)
    #[inline]
    pub fn a(&self) -> Decimal {
        self.a
    }

    /// Linear coefficient
    #[inline]
    pub fn b(&self) -> Decimal {
        self.b
    }

    /// Constant term
    #[inline]
    pub fn c(&self) -> Decimal {
        self.c
    }

    /// All three coefficients in term order
    #[inline]
    pub fn coefficients(&self) -> [Decimal; 3] {
        [self.a, self.b, self.c]
    }

    /// Display name of the unknown
    #[inline]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Explicit right-hand side, if one was supplied
    #[inline]
    pub fn answer(&self) -> Option<Decimal> {
        self.answer
    }

    /// Right-hand side value, zero when no answer was supplied
    #[inline]
    pub fn rhs(&self) -> Decimal {
        self.answer.unwrap_or(Decimal::ZERO)
    }

    /// Configuration this equation was built with
    pub fn config(&self) -> EquationConfig {
        EquationConfig {
            variable: self.variable.clone(),
            answer: self.answer,
        }
    }
}

// ============================================================================
// Deserialization goes through the same validation as construction
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawEquation {
    a: Decimal,
    b: Decimal,
    c: Decimal,
    variable: String,
    #[serde(default)]
    answer: Option<Decimal>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEquation> for QuadraticEquation {
    type Error = EquationError;

    fn try_from(raw: RawEquation) -> Result<Self, Self::Error> {
        Self::build(
            raw.a,
            raw.b,
            raw.c,
            EquationConfig {
                variable: raw.variable,
                answer: raw.answer,
            },
        )
    }
}
