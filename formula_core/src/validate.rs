//! # Numeric Validation
//!
//! Every formula declares its parameters as [`Param`]s carrying a [`Rules`]
//! set. Before any expression is evaluated, each resolved input goes through
//! [`validate`], which checks rules in a fixed order and reports the first
//! violation only:
//!
//! 1. finiteness (always)
//! 2. non-zero
//! 3. positive / non-negative
//! 4. integer
//!
//! Zero is checked ahead of sign so that a radius of `0` is reported as
//! "cannot be zero" rather than "must be positive".
//!
//! ## Example
//!
//! ```rust
//! use formula_core::validate::{validate, Param};
//!
//! const RADIUS: Param = Param::new("r", "Radius", "m").radial();
//!
//! assert_eq!(validate(2.5, &RADIUS).unwrap(), 2.5);
//! let err = validate(0.0, &RADIUS).unwrap_err();
//! assert_eq!(err.to_string(), "Radius (r) cannot be zero.");
//! ```

use serde::Serialize;

use crate::errors::{FormulaError, FormulaResult};

/// Constraint set for a single parameter. Finiteness is always implied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rules {
    #[serde(skip_serializing_if = "is_false")]
    pub positive: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub non_negative: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub non_zero: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub integer: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Rules {
    /// Only finiteness is required
    pub const ANY: Rules = Rules {
        positive: false,
        non_negative: false,
        non_zero: false,
        integer: false,
    };
}

/// Declaration of one formula input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Param {
    /// Key in the request payload (e.g. "v", "nInitial")
    pub key: &'static str,
    /// Human-readable name used in messages (e.g. "Velocity")
    pub label: &'static str,
    /// SI unit, empty for dimensionless quantities
    pub unit: &'static str,
    pub rules: Rules,
    /// Value substituted when the caller omits the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
}

impl Param {
    pub const fn new(key: &'static str, label: &'static str, unit: &'static str) -> Self {
        Param {
            key,
            label,
            unit,
            rules: Rules::ANY,
            default: None,
        }
    }

    pub const fn positive(mut self) -> Self {
        self.rules.positive = true;
        self
    }

    pub const fn non_negative(mut self) -> Self {
        self.rules.non_negative = true;
        self
    }

    pub const fn non_zero(mut self) -> Self {
        self.rules.non_zero = true;
        self
    }

    pub const fn integer(mut self) -> Self {
        self.rules.integer = true;
        self
    }

    /// Radial distance in an inverse-square or inverse-linear law
    pub const fn radial(self) -> Self {
        self.non_zero().positive()
    }

    /// Quantum number or turn count
    pub const fn counting(self) -> Self {
        self.positive().integer()
    }

    pub const fn default_value(mut self, value: f64) -> Self {
        self.default = Some(value);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// Check `value` against the rules declared for `param`.
///
/// Returns the value unchanged when every rule holds.
pub fn validate(value: f64, param: &Param) -> FormulaResult<f64> {
    let rules = &param.rules;

    if !value.is_finite() {
        return Err(FormulaError::invalid_type(param.key, param.label));
    }
    if rules.non_zero && value == 0.0 {
        return Err(FormulaError::must_be_non_zero(param.key, param.label));
    }
    if rules.positive && value <= 0.0 {
        return Err(FormulaError::must_be_positive(param.key, param.label));
    }
    if rules.non_negative && value < 0.0 {
        return Err(FormulaError::must_be_non_negative(param.key, param.label));
    }
    if rules.integer && value.fract() != 0.0 {
        return Err(FormulaError::must_be_integer(param.key, param.label));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: Param = Param::new("r", "Radius", "m").radial();
    const MASS: Param = Param::new("m", "Mass", "kg").non_negative();
    const LEVEL: Param = Param::new("n", "Quantum number", "").counting();
    const VELOCITY: Param = Param::new("v", "Velocity", "m/s");

    #[test]
    fn test_accepts_valid_values() {
        assert_eq!(validate(3.0, &RADIUS).unwrap(), 3.0);
        assert_eq!(validate(0.0, &MASS).unwrap(), 0.0);
        assert_eq!(validate(2.0, &LEVEL).unwrap(), 2.0);
        assert_eq!(validate(-12.5, &VELOCITY).unwrap(), -12.5);
    }

    #[test]
    fn test_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate(bad, &VELOCITY).unwrap_err();
            assert_eq!(err, FormulaError::invalid_type("v", "Velocity"));
        }
    }

    #[test]
    fn test_zero_reported_before_sign() {
        let err = validate(0.0, &RADIUS).unwrap_err();
        assert_eq!(err.to_string(), "Radius (r) cannot be zero.");

        let err = validate(-1.0, &RADIUS).unwrap_err();
        assert_eq!(err.to_string(), "Radius (r) must be positive.");
    }

    #[test]
    fn test_non_negative() {
        let err = validate(-0.5, &MASS).unwrap_err();
        assert_eq!(err.to_string(), "Mass (m) cannot be negative.");
    }

    #[test]
    fn test_sign_reported_before_integrality() {
        // -1.5 violates both positive and integer; only the first is reported
        let err = validate(-1.5, &LEVEL).unwrap_err();
        assert!(matches!(err, FormulaError::MustBePositive { .. }));

        let err = validate(2.5, &LEVEL).unwrap_err();
        assert_eq!(err.to_string(), "Quantum number (n) must be an integer.");
    }

    #[test]
    fn test_builder_flags() {
        assert!(RADIUS.rules.positive && RADIUS.rules.non_zero);
        assert!(!RADIUS.rules.integer);
        let c = Param::new("c", "Speed of light", "m/s").positive().default_value(1.0);
        assert!(c.is_optional());
        assert!(!VELOCITY.is_optional());
    }
}
