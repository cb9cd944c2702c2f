// ============================================================================
// Quadratic Solver
// Real roots via the quadratic formula over exact decimals
// ============================================================================

use crate::domain::QuadraticEquation;
use crate::numeric::{exact_mul, exact_sub, EquationError, NumericResult};
use arrayvec::ArrayVec;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many real roots an equation has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RootKind {
    /// Negative discriminant
    None,
    /// Zero discriminant, one repeated root
    Single,
    /// Positive discriminant, two distinct roots
    Distinct,
}

/// Real roots in ascending order (at most two).
///
/// An empty value is the normal outcome for a negative discriminant, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roots(ArrayVec<Decimal, 2>);

impl Roots {
    /// No real roots
    pub fn none() -> Self {
        Self(ArrayVec::new())
    }

    fn single(root: Decimal) -> Self {
        let mut roots = ArrayVec::new();
        roots.push(root);
        Self(roots)
    }

    fn pair(first: Decimal, second: Decimal) -> Self {
        let (low, high) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self(ArrayVec::from([low, high]))
    }

    pub fn kind(&self) -> RootKind {
        match self.0.len() {
            0 => RootKind::None,
            1 => RootKind::Single,
            _ => RootKind::Distinct,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<Decimal> {
        self.0.to_vec()
    }

    /// Smallest root, if any
    pub fn first(&self) -> Option<Decimal> {
        self.0.first().copied()
    }

    /// Largest root, if any
    pub fn last(&self) -> Option<Decimal> {
        self.0.last().copied()
    }
}

impl IntoIterator for Roots {
    type Item = Decimal;
    type IntoIter = arrayvec::IntoIter<Decimal, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Solving
// ============================================================================

/// Solve an equation for its real roots.
///
/// The right-hand side is moved across first, so `x² = 4` solves as
/// `x² - 4 = 0`. The discriminant and its sign are exact; only `√D` is taken
/// in `f64`, so roots of a positive discriminant carry that rounding.
///
/// # Errors
/// Returns `Overflow` if an intermediate value leaves the decimal range.
///
/// # Example
/// ```
/// use quadratic_equation::prelude::*;
/// use rust_decimal::Decimal;
///
/// let eq = QuadraticEquation::new([1, -4, -5], "x").unwrap();
/// let roots = solve(&eq).unwrap();
/// assert_eq!(roots.as_slice(), &[Decimal::from(-1), Decimal::from(5)]);
/// ```
pub fn solve(equation: &QuadraticEquation) -> NumericResult<Roots> {
    let a = equation.a();
    let b = equation.b();
    let discriminant = equation.discriminant()?;
    let minus_b = -b;

    let roots = match discriminant.cmp(&Decimal::ZERO) {
        Ordering::Less => Roots::none(),
        Ordering::Equal => Roots::single(divide_by_two_a(minus_b, a)?.normalize()),
        Ordering::Greater => {
            let sqrt = float_sqrt(discriminant)?;
            let low = divide_by_two_a(checked(minus_b.checked_sub(sqrt))?, a)?;
            let high = divide_by_two_a(checked(minus_b.checked_add(sqrt))?, a)?;
            Roots::pair(low.normalize(), high.normalize())
        },
    };

    tracing::debug!(
        equation = %equation,
        %discriminant,
        kind = ?roots.kind(),
        roots = ?roots.as_slice(),
        "quadratic equation solved"
    );

    Ok(roots)
}

/// `b² - 4ac` with the right-hand side folded into `c`.
///
/// Every step is exact, so the sign of the result is trustworthy.
///
/// # Errors
/// - `Overflow` if a product or difference leaves the decimal range
/// - `PrecisionLoss` if an exact intermediate needs more than 28 fractional
///   digits (e.g. `a = c = 1e-15`, where `4ac = 4e-30`)
pub fn discriminant(equation: &QuadraticEquation) -> NumericResult<Decimal> {
    let a = equation.a();
    let b = equation.b();
    let c = exact_sub(equation.c(), equation.rhs())?;

    let b_squared = exact_mul(b, b)?;
    let four_ac = exact_mul(exact_mul(a, c)?, Decimal::from(4))?;
    exact_sub(b_squared, four_ac)
}

impl QuadraticEquation {
    /// Real roots in ascending order, see [`solve`]
    pub fn solve(&self) -> NumericResult<Roots> {
        solve(self)
    }

    /// Discriminant of the equation moved to `… = 0` form
    pub fn discriminant(&self) -> NumericResult<Decimal> {
        discriminant(self)
    }
}

#[inline]
fn checked(value: Option<Decimal>) -> NumericResult<Decimal> {
    value.ok_or(EquationError::Overflow)
}

/// `numerator / 2a`, halving after the division when `2a` itself overflows.
/// a != 0 is guaranteed by construction.
fn divide_by_two_a(numerator: Decimal, a: Decimal) -> NumericResult<Decimal> {
    match a.checked_mul(Decimal::TWO) {
        Some(two_a) => checked(numerator.checked_div(two_a)),
        None => checked(checked(numerator.checked_div(a))?.checked_div(Decimal::TWO)),
    }
}

/// Square root through `f64`; exact decimal roots are not attempted.
fn float_sqrt(value: Decimal) -> NumericResult<Decimal> {
    let root = value.to_f64().ok_or(EquationError::Overflow)?.sqrt();
    Decimal::from_f64(root).ok_or(EquationError::Overflow)
}
