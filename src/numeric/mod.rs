// ============================================================================
// Numeric Module
// Exact-decimal coefficients and the errors raised while handling them
// ============================================================================
//
// This module provides:
// - IntoCoefficient: conversion of integers, floats, text and decimals
// - exact_mul / exact_add / exact_sub: decimal arithmetic that never rounds
// - EquationError: construction and arithmetic failures
//
// Coefficients are always rust_decimal::Decimal; binary floats only appear
// at the input boundary and in the solver's square root step.

mod coefficient;
mod errors;
mod exact;

pub use coefficient::IntoCoefficient;
pub use errors::{EquationError, NumericResult};
pub use exact::{exact_add, exact_mul, exact_sub, MAX_SCALE};
