// ============================================================================
// Domain Models Module
// The quadratic equation value and its configuration
// ============================================================================

pub mod equation;
pub mod equation_config;

pub use equation::{QuadraticEquation, COEFFICIENT_KEYS};
pub use equation_config::{EquationConfig, DEFAULT_VARIABLE};
