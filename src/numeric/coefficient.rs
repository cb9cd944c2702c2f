// ============================================================================
// Coefficient Conversion
// Turns caller-supplied numbers and text into exact decimals
// ============================================================================

use super::errors::{EquationError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A value that can become an exact decimal coefficient.
///
/// Integers and [`Decimal`] convert losslessly. Text must be a plain decimal
/// literal (`"-5.8"`, `" 12 "`) that fits without rounding. Floats go through
/// their shortest round-trip text, so `5.8_f64` becomes exactly `5.8` rather
/// than the nearest binary fraction; only digits past the 28th fractional
/// place are rounded.
pub trait IntoCoefficient {
    fn into_coefficient(self) -> NumericResult<Decimal>;
}

impl IntoCoefficient for Decimal {
    #[inline]
    fn into_coefficient(self) -> NumericResult<Decimal> {
        Ok(self)
    }
}

impl IntoCoefficient for &Decimal {
    #[inline]
    fn into_coefficient(self) -> NumericResult<Decimal> {
        Ok(*self)
    }
}

impl IntoCoefficient for &str {
    fn into_coefficient(self) -> NumericResult<Decimal> {
        parse_decimal(self)
    }
}

impl IntoCoefficient for String {
    fn into_coefficient(self) -> NumericResult<Decimal> {
        parse_decimal(&self)
    }
}

impl IntoCoefficient for &String {
    fn into_coefficient(self) -> NumericResult<Decimal> {
        parse_decimal(self)
    }
}

macro_rules! impl_integer_coefficient {
    ($($t:ty),*) => {
        $(
            impl IntoCoefficient for $t {
                #[inline]
                fn into_coefficient(self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_integer_coefficient!(i32, i64, u32, u64);

macro_rules! impl_float_coefficient {
    ($($t:ty),*) => {
        $(
            impl IntoCoefficient for $t {
                fn into_coefficient(self) -> NumericResult<Decimal> {
                    float_to_decimal(self, self.is_finite())
                }
            }
        )*
    };
}

impl_float_coefficient!(f32, f64);

/// Parse a plain decimal literal without rounding.
fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(EquationError::UnparseableCoefficient {
            input: s.to_string(),
        });
    }

    Decimal::from_str_exact(trimmed).map_err(|_| EquationError::UnparseableCoefficient {
        input: s.to_string(),
    })
}

/// Convert a float into the decimal its shortest text form denotes.
///
/// Text with more than 28 fractional digits is rounded to that scale. NaN,
/// infinities and values outside the decimal range (including tiny values
/// that would round to zero) are rejected.
fn float_to_decimal<F: fmt::Display>(value: F, finite: bool) -> NumericResult<Decimal> {
    let text = value.to_string();
    let unparseable = || EquationError::UnparseableCoefficient {
        input: text.clone(),
    };

    if !finite {
        return Err(unparseable());
    }
    if let Ok(exact) = Decimal::from_str_exact(&text) {
        return Ok(exact);
    }

    match Decimal::from_str(&text) {
        Ok(rounded) if !rounded.is_zero() => Ok(rounded),
        _ => Err(unparseable()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_passthrough() {
        let d = Decimal::new(58, 1);
        assert_eq!(d.into_coefficient().unwrap(), d);
        assert_eq!((&d).into_coefficient().unwrap(), d);
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(7i32.into_coefficient().unwrap(), Decimal::from(7));
        assert_eq!((-7i64).into_coefficient().unwrap(), Decimal::from(-7));
        assert_eq!(7u64.into_coefficient().unwrap(), Decimal::from(7));
    }

    #[test]
    fn test_from_float_is_shortest_decimal() {
        assert_eq!(5.8f64.into_coefficient().unwrap(), Decimal::new(58, 1));
        assert_eq!(2.1f64.into_coefficient().unwrap(), Decimal::new(21, 1));
        assert_eq!(123.90f64.into_coefficient().unwrap(), Decimal::new(1239, 1));
        assert_eq!((-90.2f64).into_coefficient().unwrap(), Decimal::new(-902, 1));
        assert_eq!(5.8f32.into_coefficient().unwrap(), Decimal::new(58, 1));
    }

    #[test]
    fn test_from_float_non_finite() {
        assert!(matches!(
            f64::NAN.into_coefficient(),
            Err(EquationError::UnparseableCoefficient { .. })
        ));
        assert!(matches!(
            f64::INFINITY.into_coefficient(),
            Err(EquationError::UnparseableCoefficient { .. })
        ));
        assert!(matches!(
            f32::NEG_INFINITY.into_coefficient(),
            Err(EquationError::UnparseableCoefficient { .. })
        ));
    }

    #[test]
    fn test_from_float_with_small_exponent() {
        // shortest text has 31 fractional digits, rounded to 28
        let d = 1.2345678901234567e-15f64.into_coefficient().unwrap();
        let expected = Decimal::from_i128_with_scale(12_345_678_901_235, 28);
        assert!(d.scale() <= 28);
        assert!((d - expected).abs() <= Decimal::new(1, 28));

        let d = 1.5e-20f32.into_coefficient().unwrap();
        assert_eq!(d, Decimal::new(15, 21));
    }

    #[test]
    fn test_from_float_large_values() {
        assert_eq!(
            1e20f64.into_coefficient().unwrap(),
            Decimal::from_i128_with_scale(10i128.pow(20), 0)
        );
        assert!(matches!(
            1e30f64.into_coefficient(),
            Err(EquationError::UnparseableCoefficient { .. })
        ));
    }

    #[test]
    fn test_from_float_below_decimal_range() {
        assert!(matches!(
            1e-30f64.into_coefficient(),
            Err(EquationError::UnparseableCoefficient { .. })
        ));
        assert_eq!(0.0f64.into_coefficient().unwrap(), Decimal::ZERO);
        assert_eq!((-0.0f64).into_coefficient().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("123.456".into_coefficient().unwrap(), Decimal::new(123456, 3));
        assert_eq!(" -0.001 ".into_coefficient().unwrap(), Decimal::new(-1, 3));
        assert_eq!(String::from("42").into_coefficient().unwrap(), Decimal::from(42));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "not_a_number".into_coefficient(),
            Err(EquationError::UnparseableCoefficient {
                input: "not_a_number".to_string()
            })
        );
        assert!("".into_coefficient().is_err());
        assert!("1.2.3".into_coefficient().is_err());
    }
}
