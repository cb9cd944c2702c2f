// ============================================================================
// Equation Renderer
// Canonical algebraic notation: `2z² + 23z + 5.8 = 0`
// ============================================================================

use crate::domain::QuadraticEquation;
use rust_decimal::Decimal;
use std::fmt;

/// Render an equation as `<A><v>² [± <B><v>] [± <C>] = <rhs>`.
///
/// - the leading term carries its sign inline (`-2x²`, never `+2x²`)
/// - later terms read ` + 23x` / ` - 5.8`
/// - zero linear and constant terms are dropped
/// - the right-hand side is always shown, `0` when no answer was given
///
/// # Example
/// ```
/// use quadratic_equation::prelude::*;
///
/// let eq = QuadraticEquation::new([2, 0, 5], "qwe").unwrap();
/// assert_eq!(render(&eq), "2qwe² + 5 = 0");
/// ```
pub fn render(equation: &QuadraticEquation) -> String {
    equation.to_string()
}

/// Minimal decimal text: `2.0` → `2`, `5.80` → `5.8`, `-0` → `0`.
pub fn format_decimal(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    value.normalize().to_string()
}

fn sign_symbol(value: Decimal) -> char {
    if value.is_sign_negative() {
        '-'
    } else {
        '+'
    }
}

impl fmt::Display for QuadraticEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variable = self.variable();

        write!(f, "{}{}²", format_decimal(self.a()), variable)?;

        let b = self.b();
        if !b.is_zero() {
            write!(
                f,
                " {} {}{}",
                sign_symbol(b),
                format_decimal(b.abs()),
                variable
            )?;
        }

        let c = self.c();
        if !c.is_zero() {
            write!(f, " {} {}", sign_symbol(c), format_decimal(c.abs()))?;
        }

        write!(f, " = {}", format_decimal(self.rhs()))
    }
}
