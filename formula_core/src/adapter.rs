//! # Request Adapter
//!
//! Boundary between a transport (HTTP, CLI) and the registry. Takes a formula
//! identifier and a raw payload, and always produces a [`Reply`]: either the
//! result or a structured failure. Panics inside an evaluator are caught and
//! reported as [`ErrorKind::Internal`]; nothing escapes unstructured.
//!
//! ## Wire Shapes
//!
//! ```json
//! { "result": 20.0 }
//! { "result": 20.0, "inputs": { "r": 5.0, "v": 10.0 } }
//! { "error": "Radius (r) cannot be zero.", "code": "MUST_BE_NON_ZERO", "kind": "domain_violation" }
//! ```

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::{ErrorKind, FormulaError, FormulaResult};
use crate::format::Outcome;
use crate::params::ParameterSet;
use crate::registry::{self, Evaluation};

/// Structured failure body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub error: String,
    pub code: &'static str,
    pub kind: ErrorKind,
}

impl From<&FormulaError> for Failure {
    fn from(err: &FormulaError) -> Self {
        Failure {
            error: err.to_string(),
            code: err.error_code(),
            kind: err.kind(),
        }
    }
}

/// Outcome of one adapted request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Success {
        result: Outcome,
        #[serde(skip_serializing_if = "Option::is_none")]
        inputs: Option<BTreeMap<&'static str, f64>>,
    },
    Failure(Failure),
}

impl Reply {
    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success { .. })
    }

    /// Failure kind, or `None` on success
    pub fn failure_kind(&self) -> Option<ErrorKind> {
        match self {
            Reply::Success { .. } => None,
            Reply::Failure(failure) => Some(failure.kind),
        }
    }

    fn from_evaluation(evaluation: Evaluation, echo_inputs: bool) -> Self {
        Reply::Success {
            result: evaluation.result,
            inputs: echo_inputs.then_some(evaluation.inputs),
        }
    }
}

/// Evaluate `formula_id` against a JSON payload.
///
/// A missing body (`null`) is treated as an empty object.
///
/// ```rust
/// use formula_core::adapter::handle;
/// use serde_json::json;
///
/// let reply = handle("centripetal-acceleration", &json!({"v": 10, "r": 5}), false);
/// assert_eq!(serde_json::to_value(&reply).unwrap(), json!({"result": 20.0}));
/// ```
pub fn handle(formula_id: &str, payload: &Value, echo_inputs: bool) -> Reply {
    match ParameterSet::from_json(payload) {
        Ok(params) => handle_params(formula_id, &params, echo_inputs),
        Err(err) => failure(formula_id, err),
    }
}

/// Evaluate `formula_id` against an already-built parameter set.
pub fn handle_params(formula_id: &str, params: &ParameterSet, echo_inputs: bool) -> Reply {
    match guarded(|| registry::evaluate_by_id(formula_id, params)) {
        Ok(evaluation) => {
            debug!(formula = formula_id, "evaluated");
            Reply::from_evaluation(evaluation, echo_inputs)
        }
        Err(err) => failure(formula_id, err),
    }
}

fn failure(formula_id: &str, err: FormulaError) -> Reply {
    debug!(formula = formula_id, code = err.error_code(), "evaluation failed: {}", err);
    Reply::Failure(Failure::from(&err))
}

/// Run an evaluation, converting a panic into an internal error.
fn guarded<F>(evaluate: F) -> FormulaResult<Evaluation>
where
    F: FnOnce() -> FormulaResult<Evaluation>,
{
    catch_unwind(AssertUnwindSafe(evaluate)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "evaluator panicked".to_string());
        Err(FormulaError::Internal { message })
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json(reply: &Reply) -> Value {
        serde_json::to_value(reply).unwrap()
    }

    #[test]
    fn test_success_shape() {
        let reply = handle("centripetal-acceleration", &json!({"v": 10, "r": 5}), false);
        assert!(reply.is_success());
        assert_eq!(to_json(&reply), json!({"result": 20.0}));
    }

    #[test]
    fn test_success_with_echoed_inputs() {
        let reply = handle("centripetal-acceleration", &json!({"v": 10, "r": 5}), true);
        assert_eq!(to_json(&reply), json!({"result": 20.0, "inputs": {"r": 5.0, "v": 10.0}}));
    }

    #[test]
    fn test_failure_shape() {
        let reply = handle("centripetal-acceleration", &json!({"v": 5, "r": 0}), false);
        assert_eq!(
            to_json(&reply),
            json!({
                "error": "Radius (r) cannot be zero.",
                "code": "MUST_BE_NON_ZERO",
                "kind": "domain_violation"
            })
        );
    }

    #[test]
    fn test_infinity_serialized_as_string() {
        let reply = handle("lorentz-factor", &json!({"v": 299792458, "c": 299792458}), false);
        assert_eq!(to_json(&reply), json!({"result": "Infinity"}));
    }

    #[test]
    fn test_unknown_formula_is_not_found() {
        let reply = handle("warp-drive", &json!({}), false);
        assert_eq!(reply.failure_kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_null_payload_is_empty_object() {
        let reply = handle("centripetal-acceleration", &Value::Null, false);
        assert_eq!(to_json(&reply)["code"], "MISSING_PARAMETER");
        assert_eq!(to_json(&reply)["error"], "Velocity (v) is required.");
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let reply = handle("centripetal-acceleration", &json!([1, 2]), false);
        assert_eq!(to_json(&reply)["code"], "MALFORMED_PAYLOAD");
        assert_eq!(reply.failure_kind(), Some(ErrorKind::InputType));
    }

    #[test]
    fn test_boolean_result() {
        let reply = handle("ideal-gas-law", &json!({"P": 1, "V": 1, "n": 1, "T": 1}), false);
        assert_eq!(to_json(&reply), json!({"result": false}));
    }

    #[test]
    fn test_panic_becomes_internal_error() {
        let result = guarded(|| panic!("boom"));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "Internal error: boom");
    }
}
