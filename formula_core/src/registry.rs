//! # Formula Registry
//!
//! Static lookup from formula identifier to its [`Formula`] descriptor, plus
//! the single evaluation pipeline every formula goes through:
//!
//! 1. Parse the requested precision
//! 2. Resolve each declared parameter (defaults, then validation rules)
//! 3. Run the evaluator (cross-parameter guards, closed form)
//! 4. Round the result
//!
//! The index is built once on first use and never modified.
//!
//! ## Usage
//!
//! ```rust
//! use formula_core::params::ParameterSet;
//! use formula_core::registry;
//!
//! let params = ParameterSet::new().with("v", 10.0).with("r", 5.0);
//! let evaluation = registry::evaluate_by_id("centripetal-acceleration", &params).unwrap();
//! assert_eq!(evaluation.result.as_number(), Some(20.0));
//! ```

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{FormulaError, FormulaResult};
use crate::format::Outcome;
use crate::formulas::{all_formulas, Formula, Subject, ALL_SUBJECTS};
use crate::params::ParameterSet;
use crate::validate::Param;

static INDEX: Lazy<HashMap<&'static str, &'static Formula>> =
    Lazy::new(|| all_formulas().map(|formula| (formula.id, formula)).collect());

/// Look up a formula by identifier.
pub fn find(id: &str) -> FormulaResult<&'static Formula> {
    INDEX
        .get(id)
        .copied()
        .ok_or_else(|| FormulaError::unknown_formula(id))
}

/// Number of registered formulas
pub fn formula_count() -> usize {
    INDEX.len()
}

/// Formulas for one subject, in declaration order
pub fn in_subject(subject: Subject) -> impl Iterator<Item = &'static Formula> {
    all_formulas().filter(move |formula| formula.subject == subject)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Successful evaluation: the rounded result and the resolved inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub result: Outcome,
    /// Every declared parameter after defaults were applied
    pub inputs: BTreeMap<&'static str, f64>,
}

/// Evaluate one formula against a parameter set.
///
/// Validation stops at the first failure; no partial result is produced.
pub fn evaluate(formula: &Formula, params: &ParameterSet) -> FormulaResult<Evaluation> {
    let precision = params.precision()?;
    let values = params.resolve_all(formula.params)?;
    let result = (formula.evaluate)(&values)?.rounded(precision);

    let inputs = formula
        .params
        .iter()
        .zip(values)
        .map(|(param, value)| (param.key, value))
        .collect();

    Ok(Evaluation { result, inputs })
}

/// Look up and evaluate in one step.
pub fn evaluate_by_id(id: &str, params: &ParameterSet) -> FormulaResult<Evaluation> {
    evaluate(find(id)?, params)
}

// ============================================================================
// Listing
// ============================================================================

/// Serializable view of a formula for discovery endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: Subject,
    pub topic: &'static str,
    pub equation: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
}

impl From<&Formula> for FormulaSummary {
    fn from(formula: &Formula) -> Self {
        FormulaSummary {
            id: formula.id,
            name: formula.name,
            subject: formula.subject,
            topic: formula.topic,
            equation: formula.equation,
            description: formula.description,
            params: formula.params,
        }
    }
}

/// Summaries of every formula, in subject order
pub fn summaries() -> Vec<FormulaSummary> {
    all_formulas().map(FormulaSummary::from).collect()
}

// ============================================================================
// Markdown Reference
// ============================================================================

fn rules_text(param: &Param) -> String {
    let mut rules = Vec::new();
    if param.rules.non_zero {
        rules.push("non-zero");
    }
    if param.rules.positive {
        rules.push("positive");
    }
    if param.rules.non_negative {
        rules.push("non-negative");
    }
    if param.rules.integer {
        rules.push("integer");
    }
    if rules.is_empty() {
        "any finite".to_string()
    } else {
        rules.join(", ")
    }
}

/// Generate the complete formula reference as Markdown.
///
/// Used by the `gen-formulas` binary to produce `FORMULAS.md`.
///
/// ```rust
/// let markdown = formula_core::registry::generate_formulas_markdown();
/// assert!(markdown.contains("# Physics Formula Reference"));
/// assert!(markdown.contains("### Centripetal Acceleration"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(64_000);

    output.push_str(
        r#"# Physics Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula listed here can be evaluated with `GET /formulas/{id}` (query
parameters) or `POST /formulas/{id}` (JSON body). Add `digits` (0-16, default
4) to control rounding. Angles are in degrees.

## Limiting Cases

| Condition | Result |
|-----------|--------|
| Radial distance of zero | Error: "cannot be zero" |
| Speed equal to c (massive particle) | `Infinity` (signed for momentum) |
| Speed equal to c (length contraction) | `0` |
| Speed greater than c | Error: exceeds the speed of light |
| Photon energy below the work function | `0` |
| Identical Rydberg levels | Error: levels must differ |

---

"#,
    );

    for subject in ALL_SUBJECTS {
        let formulas: Vec<_> = in_subject(*subject).collect();
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", subject.display_name()));

        for formula in formulas {
            output.push_str(&format!("### {}\n\n", formula.name));
            output.push_str(&format!("{}\n\n", formula.description));
            output.push_str(&format!("**Identifier:** `{}`\n\n", formula.id));
            output.push_str(&format!("**Formula:** `{}`\n\n", formula.equation));

            if !formula.params.is_empty() {
                output.push_str("**Parameters:**\n\n");
                output.push_str("| Key | Description | Units | Rules | Default |\n");
                output.push_str("|-----|-------------|-------|-------|---------|\n");
                for param in formula.params {
                    let default = param
                        .default
                        .map(|d| format!("{}", d))
                        .unwrap_or_else(|| "required".to_string());
                    output.push_str(&format!(
                        "| `{}` | {} | {} | {} | {} |\n",
                        param.key,
                        param.label,
                        if param.unit.is_empty() { "-" } else { param.unit },
                        rules_text(param),
                        default
                    ));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Subjects:** {}\n",
        formula_count(),
        ALL_SUBJECTS.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn eval(id: &str, payload: serde_json::Value) -> FormulaResult<Evaluation> {
        evaluate_by_id(id, &ParameterSet::from_json(&payload)?)
    }

    #[test]
    fn test_every_formula_indexed() {
        assert_eq!(formula_count(), all_formulas().count());
        assert!(find("lorentz-factor").is_ok());
    }

    #[test]
    fn test_unknown_formula() {
        let err = find("perpetual-motion").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FORMULA");
        assert_eq!(err.kind(), crate::errors::ErrorKind::NotFound);
    }

    #[test]
    fn test_centripetal_acceleration() {
        let evaluation = eval("centripetal-acceleration", json!({"v": 10, "r": 5})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(20.0));
        assert_eq!(evaluation.inputs.get("v"), Some(&10.0));
    }

    #[test]
    fn test_centripetal_zero_radius() {
        let err = eval("centripetal-acceleration", json!({"v": 5, "r": 0})).unwrap_err();
        assert_eq!(err.to_string(), "Radius (r) cannot be zero.");
    }

    #[test]
    fn test_lorentz_factor_at_c() {
        let evaluation = eval("lorentz-factor", json!({"v": 299792458, "c": 299792458})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(f64::INFINITY));
    }

    #[test]
    fn test_lorentz_factor_above_c() {
        let err = eval("lorentz-factor", json!({"v": 3e8, "c": 299792458})).unwrap_err();
        assert!(err.to_string().contains("cannot exceed the speed of light"));
        assert_eq!(err.kind(), crate::errors::ErrorKind::PhysicalBound);
    }

    #[test]
    fn test_relativistic_energies_at_default_c() {
        for id in ["relativistic-energy", "relativistic-kinetic-energy"] {
            let evaluation = eval(id, json!({"m": 1, "v": 299792458})).unwrap();
            assert_eq!(evaluation.result, Outcome::Number(f64::INFINITY), "{}", id);
        }
    }

    #[test]
    fn test_photoelectric_clamped() {
        let evaluation = eval("photoelectric-effect", json!({"photonEnergy": 2, "phi": 5})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(0.0));
    }

    #[test]
    fn test_rydberg_same_levels() {
        let err = eval("rydberg-formula", json!({"nInitial": 2, "nFinal": 2})).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_defaults_are_applied_and_echoed() {
        let evaluation = eval("lorentz-factor", json!({"v": 0})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(1.0));
        assert_eq!(evaluation.inputs.get("c"), Some(&crate::constants::C));
    }

    #[test]
    fn test_digits_control_rounding() {
        let evaluation = eval("kinetic-energy", json!({"m": 1, "v": 1.23456, "digits": 2})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(0.76));
        let evaluation = eval("kinetic-energy", json!({"m": 1, "v": 1.23456})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(0.7621));
    }

    #[test]
    fn test_digits_round_ties_away_from_zero() {
        let evaluation = eval("average-velocity", json!({"d": 5, "t": 2, "digits": 0})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(3.0));
        let evaluation = eval("average-velocity", json!({"d": 0.25, "t": 1, "digits": 1})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(0.3));
    }

    #[test]
    fn test_invalid_digits_rejected() {
        let err = eval("kinetic-energy", json!({"m": 1, "v": 1, "digits": 20})).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PRECISION");
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let evaluation = eval("centripetal-acceleration", json!({"v": "10", "r": " 5 "})).unwrap();
        assert_eq!(evaluation.result, Outcome::Number(20.0));
    }

    #[test]
    fn test_first_violation_reported() {
        // Both inputs invalid; declaration order decides which is reported
        let err = eval("centripetal-acceleration", json!({"v": "fast", "r": 0})).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TYPE");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let params = ParameterSet::new().with("m", 3.0).with("v", 7.5);
        let first = evaluate_by_id("kinetic-energy", &params).unwrap();
        let second = evaluate_by_id("kinetic-energy", &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ideal_gas_law_returns_boolean() {
        let evaluation = eval("ideal-gas-law", json!({"P": 2, "V": 4, "n": 1, "T": 4, "R": 2})).unwrap();
        assert_eq!(evaluation.result, Outcome::Boolean(true));
    }

    #[test]
    fn test_summaries_cover_registry() {
        let summaries = summaries();
        assert_eq!(summaries.len(), formula_count());
        let json = serde_json::to_value(&summaries[0]).unwrap();
        assert!(json["params"].is_array());
        assert!(json["subject"].is_string());
    }

    #[test]
    fn test_generate_formulas_markdown() {
        let markdown = generate_formulas_markdown();
        assert!(markdown.contains("Auto-generated from source code"));
        for subject in ALL_SUBJECTS {
            assert!(
                markdown.contains(&format!("## {}", subject.display_name())),
                "Missing subject {:?}",
                subject
            );
        }
        assert!(markdown.contains("`a = v^2 / r`"));
        assert!(markdown.contains(&format!("**Total Formulas:** {}", formula_count())));
    }
}
