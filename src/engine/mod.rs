// ============================================================================
// Engine Module
// Rendering and solving over validated equations
// ============================================================================

mod renderer;
mod solver;

pub use renderer::{format_decimal, render};
pub use solver::{discriminant, solve, RootKind, Roots};
