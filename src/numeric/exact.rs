// ============================================================================
// Exact Decimal Arithmetic
// Multiplication and addition that refuse to round
// ============================================================================

use super::errors::{EquationError, NumericResult};
use rust_decimal::Decimal;

/// Largest number of fractional digits a `Decimal` can hold
pub const MAX_SCALE: u32 = 28;

/// Exact product of two decimals.
///
/// `Decimal::checked_mul` silently rounds once the product needs more than
/// 28 fractional digits. Here the product is formed on the raw mantissas and
/// only trailing zeros may be dropped to make it fit.
///
/// # Errors
/// - `Overflow` if the integer part exceeds the decimal range
/// - `PrecisionLoss` if significant digits would have to be rounded away
pub fn exact_mul(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());

    match lhs.mantissa().checked_mul(rhs.mantissa()) {
        Some(mantissa) => from_exact_parts(mantissa, lhs.scale() + rhs.scale()),
        // wider than i128: at least 39 significant digits before trimming
        None => match lhs.checked_mul(rhs) {
            None => Err(EquationError::Overflow),
            Some(_) => Err(EquationError::PrecisionLoss),
        },
    }
}

/// Exact sum of two decimals.
///
/// # Errors
/// Same as [`exact_mul`].
pub fn exact_add(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let scale = lhs.scale().max(rhs.scale());

    let aligned = rescale(lhs, scale).zip(rescale(rhs, scale));
    match aligned.and_then(|(l, r)| l.checked_add(r)) {
        Some(mantissa) => from_exact_parts(mantissa, scale),
        // operands are normalized, so the finer one's last digit is significant
        None => match lhs.checked_add(rhs) {
            None => Err(EquationError::Overflow),
            Some(_) => Err(EquationError::PrecisionLoss),
        },
    }
}

/// Exact difference of two decimals
pub fn exact_sub(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    exact_add(lhs, -rhs)
}

fn rescale(value: Decimal, scale: u32) -> Option<i128> {
    10i128
        .checked_pow(scale - value.scale())
        .and_then(|factor| value.mantissa().checked_mul(factor))
}

/// Build `mantissa × 10^-scale`, trimming only zero digits to fit.
fn from_exact_parts(mut mantissa: i128, mut scale: u32) -> NumericResult<Decimal> {
    let max_mantissa = Decimal::MAX.mantissa().unsigned_abs();

    while scale > MAX_SCALE || mantissa.unsigned_abs() > max_mantissa {
        if scale == 0 {
            return Err(EquationError::Overflow);
        }
        if mantissa % 10 != 0 {
            return Err(EquationError::PrecisionLoss);
        }
        mantissa /= 10;
        scale -= 1;
    }

    Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| EquationError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_mul() {
        assert_eq!(
            exact_mul(Decimal::new(15, 1), Decimal::new(15, 1)).unwrap(),
            Decimal::new(225, 2)
        );
        assert_eq!(
            exact_mul(Decimal::new(-4, 0), Decimal::new(25, 3)).unwrap(),
            Decimal::new(-1, 1)
        );
        assert_eq!(exact_mul(Decimal::MAX, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_exact_mul_at_scale_limit() {
        // 1e-14 * 1e-14 = 1e-28 still fits
        let tiny = Decimal::new(1, 14);
        assert_eq!(exact_mul(tiny, tiny).unwrap(), Decimal::new(1, 28));
    }

    #[test]
    fn test_exact_mul_precision_loss() {
        // 1e-15 * 1e-15 = 1e-30 cannot be represented
        let tiny = Decimal::new(1, 15);
        assert_eq!(exact_mul(tiny, tiny), Err(EquationError::PrecisionLoss));
    }

    #[test]
    fn test_exact_mul_trims_zero_digits() {
        // trailing zeros in the inputs do not count against the scale limit
        let a = Decimal::from_i128_with_scale(1_000_000_000_000_000, 20);
        let b = Decimal::from_i128_with_scale(2_000_000_000_000_000, 20);
        assert_eq!(exact_mul(a, b).unwrap(), Decimal::new(2, 10));
    }

    #[test]
    fn test_exact_mul_overflow() {
        assert_eq!(
            exact_mul(Decimal::MAX, Decimal::MAX),
            Err(EquationError::Overflow)
        );
        assert_eq!(
            exact_mul(Decimal::MAX, Decimal::from(4)),
            Err(EquationError::Overflow)
        );
    }

    #[test]
    fn test_exact_add_and_sub() {
        assert_eq!(
            exact_add(Decimal::new(1, 1), Decimal::new(2, 1)).unwrap(),
            Decimal::new(3, 1)
        );
        assert_eq!(
            exact_sub(Decimal::new(1, 2), Decimal::new(1, 2)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            exact_sub(Decimal::from(1), Decimal::new(25, 28)).unwrap(),
            Decimal::from_i128_with_scale(9_999_999_999_999_999_999_999_999_975, 28)
        );
    }

    #[test]
    fn test_exact_add_precision_loss() {
        // 1e20 + 1e-20 needs 41 significant digits
        let big = Decimal::from_i128_with_scale(10i128.pow(20), 0);
        let small = Decimal::new(1, 20);
        assert_eq!(exact_add(big, small), Err(EquationError::PrecisionLoss));
    }

    #[test]
    fn test_exact_add_overflow() {
        assert_eq!(
            exact_add(Decimal::MAX, Decimal::ONE),
            Err(EquationError::Overflow)
        );
    }
}
