//! # Parameter Sets
//!
//! A [`ParameterSet`] is the flat bag of named inputs for one evaluation,
//! plus the requested rounding precision. It is built fresh for every request
//! from a JSON object (POST body) or from string pairs (query string) and is
//! never mutated after construction.
//!
//! ## JSON Example
//!
//! ```json
//! { "v": 10, "r": 5, "digits": 2 }
//! ```
//!
//! Values may be JSON numbers or numeric strings. `digits` (alias
//! `precision`) is reserved and never treated as a formula input.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::errors::{FormulaError, FormulaResult};
use crate::format::Precision;
use crate::validate::{validate, Param};

/// Keys that control evaluation rather than feed a formula
pub const RESERVED_KEYS: &[&str] = &["digits", "precision"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterSet {
    values: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digits: Option<Value>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by Rust callers and tests.
    ///
    /// ```rust
    /// use formula_core::params::ParameterSet;
    ///
    /// let params = ParameterSet::new().with("v", 10.0).with("r", 5.0).with_digits(2);
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), Value::from(value));
        self
    }

    pub fn with_digits(mut self, digits: u8) -> Self {
        self.digits = Some(Value::from(digits));
        self
    }

    /// Build from a request body.
    ///
    /// `null` is treated as an empty object. Any other non-object payload is
    /// rejected.
    pub fn from_json(payload: &Value) -> FormulaResult<Self> {
        let map = match payload {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(FormulaError::malformed(format!(
                    "expected a JSON object of parameters, got {}",
                    json_type_name(other)
                )))
            }
        };

        let mut set = Self::default();
        for (key, value) in map {
            if RESERVED_KEYS.contains(&key.as_str()) {
                // "digits" wins over "precision" when both are present
                if key == "digits" || set.digits.is_none() {
                    set.digits = Some(value.clone());
                }
            } else {
                set.values.insert(key.clone(), value.clone());
            }
        }
        Ok(set)
    }

    /// Build from string pairs such as a parsed query string.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let object = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect::<serde_json::Map<String, Value>>();
        // An object never fails the payload shape check
        Self::from_json(&Value::Object(object)).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value for `key`, if supplied
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Requested precision, or the default when none was given.
    pub fn precision(&self) -> FormulaResult<Precision> {
        match &self.digits {
            None | Some(Value::Null) => Ok(Precision::default()),
            Some(value) => match as_number(value) {
                Some(d) => Precision::new(d),
                None => Err(FormulaError::InvalidPrecision {
                    value: value.to_string(),
                }),
            },
        }
    }

    /// Resolve and validate the input for one declared parameter.
    ///
    /// Missing values fall back to the declared default, which is validated
    /// like any caller-supplied value.
    pub fn resolve(&self, param: &Param) -> FormulaResult<f64> {
        let value = match self.values.get(param.key) {
            None | Some(Value::Null) => match param.default {
                Some(default) => default,
                None => return Err(FormulaError::missing_parameter(param.key, param.label)),
            },
            Some(raw) => as_number(raw).ok_or_else(|| FormulaError::invalid_type(param.key, param.label))?,
        };
        validate(value, param)
    }

    /// Resolve every declared parameter in order, stopping at the first failure.
    pub fn resolve_all(&self, params: &[Param]) -> FormulaResult<Vec<f64>> {
        params.iter().map(|p| self.resolve(p)).collect()
    }
}

/// Numeric view of a raw value. Strings are parsed so query-string input
/// behaves like JSON numbers; booleans, arrays and objects are not numbers.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const RADIUS: Param = Param::new("r", "Radius", "m").radial();
    const C: Param = Param::new("c", "Speed of light", "m/s").positive().default_value(299_792_458.0);

    #[test]
    fn test_from_json_splits_reserved_keys() {
        let set = ParameterSet::from_json(&json!({"v": 10, "r": 5, "digits": 2})).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.precision().unwrap().digits(), 2);
        assert!(set.raw("digits").is_none());
    }

    #[test]
    fn test_precision_alias() {
        let set = ParameterSet::from_json(&json!({"precision": 6})).unwrap();
        assert_eq!(set.precision().unwrap().digits(), 6);

        let set = ParameterSet::from_json(&json!({"precision": 6, "digits": 1})).unwrap();
        assert_eq!(set.precision().unwrap().digits(), 1);
    }

    #[test]
    fn test_default_precision() {
        let set = ParameterSet::from_json(&json!({})).unwrap();
        assert_eq!(set.precision().unwrap().digits(), 4);
    }

    #[test]
    fn test_bad_precision() {
        let set = ParameterSet::from_json(&json!({"digits": 20})).unwrap();
        assert!(matches!(set.precision(), Err(FormulaError::InvalidPrecision { .. })));
        let set = ParameterSet::from_json(&json!({"digits": "lots"})).unwrap();
        assert!(set.precision().is_err());
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let err = ParameterSet::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_PAYLOAD");
        assert!(ParameterSet::from_json(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_numbers_and_strings() {
        let set = ParameterSet::from_json(&json!({"r": "2.5"})).unwrap();
        assert_eq!(set.resolve(&RADIUS).unwrap(), 2.5);

        let set = ParameterSet::from_pairs([("r", " 4 ")]);
        assert_eq!(set.resolve(&RADIUS).unwrap(), 4.0);
    }

    #[test]
    fn test_resolve_missing_and_default() {
        let set = ParameterSet::new();
        let err = set.resolve(&RADIUS).unwrap_err();
        assert_eq!(err.to_string(), "Radius (r) is required.");
        assert_eq!(set.resolve(&C).unwrap(), 299_792_458.0);
    }

    #[test]
    fn test_resolve_rejects_non_numeric() {
        for bad in [json!(true), json!("abc"), json!(""), json!([1]), json!({"x": 1}), json!("NaN"), json!("inf")] {
            let set = ParameterSet::from_json(&json!({ "r": bad })).unwrap();
            let err = set.resolve(&RADIUS).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_TYPE", "value {:?}", set.raw("r"));
        }
    }

    #[test]
    fn test_resolve_all_fails_fast_in_order() {
        let params = [Param::new("a", "First", ""), Param::new("b", "Second", "")];
        let set = ParameterSet::new();
        let err = set.resolve_all(&params).unwrap_err();
        assert_eq!(err, FormulaError::missing_parameter("a", "First"));
    }
}
