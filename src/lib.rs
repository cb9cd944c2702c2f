// ============================================================================
// Quadratic Equation Library
// Exact-decimal quadratic equations: validation, rendering and real roots
// ============================================================================

//! # Quadratic Equation
//!
//! Quadratic equations `a·v² + b·v + c = answer` whose coefficients are exact
//! decimals ([`rust_decimal::Decimal`]).
//!
//! ## Features
//!
//! - **Validated construction** from integers, floats, text, decimals or a
//!   keyed map; a zero leading coefficient is rejected
//! - **Canonical rendering** such as `-2x² - 23x - 5.8 = 0`
//! - **Real roots** in ascending order, with an exact discriminant
//!
//! ## Example
//!
//! ```rust
//! use quadratic_equation::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let eq = QuadraticEquation::new([1, -4, -5], "x").unwrap();
//! assert_eq!(eq.to_string(), "1x² - 4x - 5 = 0");
//!
//! let roots = eq.solve().unwrap();
//! assert_eq!(roots.as_slice(), &[Decimal::from(-1), Decimal::from(5)]);
//!
//! let shifted = QuadraticEquation::with_answer([2.5, 2.0, 5.0], 0, "x").unwrap();
//! assert_eq!(render(&shifted), "2.5x² + 2x + 5 = 0");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{EquationConfig, QuadraticEquation, DEFAULT_VARIABLE};
    pub use crate::engine::{discriminant, format_decimal, render, solve, RootKind, Roots};
    pub use crate::numeric::{EquationError, IntoCoefficient, NumericResult};
}
