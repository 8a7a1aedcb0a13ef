//! # Result Formatting
//!
//! Rounds computed values to a caller-specified number of decimal places.
//! Rounding works on the decimal expansion of the value rather than on
//! `x * 10^d`, which keeps large magnitudes from overflowing and makes
//! rounding idempotent.
//!
//! ## Ties
//!
//! Exact ties round half away from zero: `2.5` becomes `3` and `-0.25` at
//! one digit becomes `-0.3`. A literal such as `1.005` is stored as
//! `1.00499999...` and is therefore not a tie; it rounds to `1.0` at two
//! digits.
//!
//! Non-finite values are legitimate results for limiting cases (a Lorentz
//! factor at `v = c` is `Infinity`) and are passed through untouched.

use serde::{Serialize, Serializer};

use crate::errors::{FormulaError, FormulaResult};

/// Decimal places applied when the caller does not ask for any
pub const DEFAULT_DIGITS: u8 = 4;

/// Largest accepted precision
pub const MAX_DIGITS: u8 = 16;

/// Validated rounding precision (0-16 decimal places).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Validate a caller-supplied precision.
    pub fn new(digits: f64) -> FormulaResult<Self> {
        if !digits.is_finite() || digits.fract() != 0.0 || digits < 0.0 || digits > MAX_DIGITS as f64 {
            return Err(FormulaError::InvalidPrecision {
                value: digits.to_string(),
            });
        }
        Ok(Precision(digits as u8))
    }

    pub fn digits(&self) -> u8 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_DIGITS)
    }
}

/// Extra digits expanded past the rounding position. A finite `f64` that is
/// not an exact tie differs from the nearest tie by more than `10^-(d+17)`,
/// so the first dropped digit is always exact at this depth.
const GUARD_DIGITS: usize = 25;

/// Round `value` to `digits` decimal places, ties away from zero.
///
/// ```rust
/// use formula_core::format::round_to;
///
/// assert_eq!(round_to(20.000000001, 4), 20.0);
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert!(round_to(f64::INFINITY, 4).is_infinite());
/// ```
pub fn round_to(value: f64, digits: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let digits = digits as usize;
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (whole, fraction) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));
    let (kept, dropped) = fraction.split_at(digits.min(fraction.len()));

    let mut magnitude = if digits == 0 {
        whole.to_string()
    } else {
        format!("{}.{}", whole, kept)
    };
    if matches!(dropped.as_bytes().first(), Some(b'5'..=b'9')) {
        magnitude = increment_last_digit(&magnitude);
    }

    let rounded = match magnitude.parse::<f64>() {
        Ok(m) if value < 0.0 => -m,
        Ok(m) => m,
        Err(_) => value,
    };
    // -0.0 prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Add one unit in the last place of a plain decimal string ("9.99" -> "10.00").
fn increment_last_digit(decimal: &str) -> String {
    let mut chars: Vec<char> = decimal.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from_digit(d.to_digit(10).unwrap_or(0) + 1, 10).unwrap_or('0');
                return chars.into_iter().collect();
            }
        }
    }
    // every digit carried
    std::iter::once('1').chain(chars).collect()
}

/// Value produced by a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Number(f64),
    /// Identity checks (ideal gas law)
    Boolean(bool),
}

impl Outcome {
    /// Apply rounding; booleans are returned unchanged.
    pub fn rounded(self, precision: Precision) -> Self {
        match self {
            Outcome::Number(x) => Outcome::Number(round_to(x, precision.digits())),
            Outcome::Boolean(b) => Outcome::Boolean(b),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Outcome::Number(x) => Some(*x),
            Outcome::Boolean(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Boolean(b) => Some(*b),
            Outcome::Number(_) => None,
        }
    }
}

impl From<f64> for Outcome {
    fn from(x: f64) -> Self {
        Outcome::Number(x)
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Outcome::Boolean(b)
    }
}

/// JSON has no literal for non-finite numbers, so they are written as the
/// strings `"Infinity"`, `"-Infinity"` and `"NaN"`.
pub fn serialize_number<S: Serializer>(x: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_finite() {
        serializer.serialize_f64(x)
    } else if x.is_nan() {
        serializer.serialize_str("NaN")
    } else if x > 0.0 {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Number(x) => serialize_number(*x, serializer),
            Outcome::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_default_digits() {
        assert_eq!(round_to(20.0, DEFAULT_DIGITS), 20.0);
        assert_eq!(round_to(3.14159265, DEFAULT_DIGITS), 3.1416);
        assert_eq!(round_to(-2.71828, 2), -2.72);
        assert_eq!(round_to(1234.5678, 0), 1235.0);
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(9.95, 1), 9.9); // stored below the tie
        assert_eq!(round_to(99.5, 0), 100.0);
        assert_eq!(round_to(1.005, 2), 1.0);
    }

    #[test]
    fn test_increment_last_digit_carries() {
        assert_eq!(increment_last_digit("0.2"), "0.3");
        assert_eq!(increment_last_digit("9.99"), "10.00");
        assert_eq!(increment_last_digit("99"), "100");
        assert_eq!(increment_last_digit("0"), "1");
    }

    #[test]
    fn test_round_to_large_and_small_magnitudes() {
        assert_eq!(round_to(8.987_551_792_3e9, 4), 8_987_551_792.3);
        assert_eq!(round_to(1e300, 16), 1e300);
        assert_eq!(round_to(6.626e-34, 4), 0.0);
    }

    #[test]
    fn test_round_to_passes_non_finite() {
        assert_eq!(round_to(f64::INFINITY, 4), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 4), f64::NEG_INFINITY);
        assert!(round_to(f64::NAN, 4).is_nan());
    }

    #[test]
    fn test_negative_zero_normalised() {
        let r = round_to(-0.00001, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(Precision::new(0.0).unwrap().digits(), 0);
        assert_eq!(Precision::new(16.0).unwrap().digits(), 16);
        assert_eq!(Precision::default().digits(), 4);
        assert!(Precision::new(17.0).is_err());
        assert!(Precision::new(-1.0).is_err());
        assert!(Precision::new(2.5).is_err());
        assert!(Precision::new(f64::NAN).is_err());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(serde_json::to_string(&Outcome::Number(20.0)).unwrap(), "20.0");
        assert_eq!(serde_json::to_string(&Outcome::Number(f64::INFINITY)).unwrap(), "\"Infinity\"");
        assert_eq!(serde_json::to_string(&Outcome::Number(f64::NEG_INFINITY)).unwrap(), "\"-Infinity\"");
        assert_eq!(serde_json::to_string(&Outcome::Boolean(true)).unwrap(), "true");
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(x in -1e12f64..1e12f64, d in 0u8..=MAX_DIGITS) {
            let once = round_to(x, d);
            prop_assert_eq!(round_to(once, d), once);
        }

        #[test]
        fn rounding_stays_within_half_ulp_of_digit(x in -1e6f64..1e6f64, d in 0u8..=6) {
            let rounded = round_to(x, d);
            let step = 10f64.powi(-(d as i32));
            prop_assert!((rounded - x).abs() <= step / 2.0 + 1e-9);
        }
    }
}
