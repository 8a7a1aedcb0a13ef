//! # Formula Evaluators
//!
//! One pure function per physical equation, grouped by subject. Each
//! function takes plain `f64` arguments and performs the cross-parameter
//! guard checks that single-parameter [`Rules`](crate::validate::Rules)
//! cannot express (light-speed bounds, zero denominators, degenerate
//! transitions). Per-parameter rules are declared next to each function in
//! the subject's `FORMULAS` table and enforced by the registry before the
//! function runs.
//!
//! ## Modules
//!
//! - [`mechanics`] - kinematics, dynamics, rotation, oscillation, energy
//! - [`gravitation`] - Newtonian gravity and orbits
//! - [`fluids`] - density, pressure, flow
//! - [`electromagnetism`] - electrostatics, circuits, magnetism
//! - [`thermodynamics`] - heat, gases, temperature scales
//! - [`waves`] - waves, sound and geometric optics
//! - [`relativity`] - special relativity
//! - [`quantum`] - quantum and nuclear physics
//!
//! ## Angles
//!
//! Angles are supplied in degrees and returned in degrees.

pub mod electromagnetism;
pub mod fluids;
pub mod gravitation;
pub mod mechanics;
pub mod quantum;
pub mod relativity;
pub mod thermodynamics;
pub mod waves;

use serde::{Deserialize, Serialize};

use crate::errors::{FormulaError, FormulaResult};
use crate::format::Outcome;
use crate::validate::Param;

/// Top-level grouping used by the explanation store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mechanics,
    Gravitation,
    Fluids,
    Electromagnetism,
    Thermodynamics,
    Waves,
    Relativity,
    Quantum,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mechanics => "mechanics",
            Subject::Gravitation => "gravitation",
            Subject::Fluids => "fluids",
            Subject::Electromagnetism => "electromagnetism",
            Subject::Thermodynamics => "thermodynamics",
            Subject::Waves => "waves",
            Subject::Relativity => "relativity",
            Subject::Quantum => "quantum",
        }
    }

    /// Display name for reference documents
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Mechanics => "Mechanics",
            Subject::Gravitation => "Gravitation",
            Subject::Fluids => "Fluids",
            Subject::Electromagnetism => "Electromagnetism",
            Subject::Thermodynamics => "Thermodynamics",
            Subject::Waves => "Waves & Optics",
            Subject::Relativity => "Relativity",
            Subject::Quantum => "Quantum & Nuclear",
        }
    }

    pub fn parse(s: &str) -> Option<Subject> {
        ALL_SUBJECTS.iter().copied().find(|subject| subject.as_str() == s)
    }
}

pub const ALL_SUBJECTS: &[Subject] = &[
    Subject::Mechanics,
    Subject::Gravitation,
    Subject::Fluids,
    Subject::Electromagnetism,
    Subject::Thermodynamics,
    Subject::Waves,
    Subject::Relativity,
    Subject::Quantum,
];

/// Evaluator entry point: receives validated inputs in declaration order.
pub type EvalFn = fn(&[f64]) -> FormulaResult<Outcome>;

/// Static description of one formula.
#[derive(Clone, Copy)]
pub struct Formula {
    /// Identifier used in URLs (e.g. "centripetal-acceleration")
    pub id: &'static str,
    pub name: &'static str,
    pub subject: Subject,
    /// Finer grouping within the subject (e.g. "kinematics")
    pub topic: &'static str,
    /// Plain-text equation
    pub equation: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    pub evaluate: EvalFn,
}

impl std::fmt::Debug for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formula")
            .field("id", &self.id)
            .field("subject", &self.subject)
            .field("params", &self.params.len())
            .finish()
    }
}

/// Destructure validated inputs into a fixed-size array.
///
/// The registry always passes one value per declared parameter, so a length
/// mismatch is a programming error in the formula table.
pub(crate) fn args<const N: usize>(x: &[f64]) -> FormulaResult<[f64; N]> {
    x.try_into().map_err(|_| FormulaError::Internal {
        message: format!("expected {} inputs, received {}", N, x.len()),
    })
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Every formula, in subject order
pub fn all_formulas() -> impl Iterator<Item = &'static Formula> {
    mechanics::FORMULAS
        .iter()
        .chain(gravitation::FORMULAS)
        .chain(fluids::FORMULAS)
        .chain(electromagnetism::FORMULAS)
        .chain(thermodynamics::FORMULAS)
        .chain(waves::FORMULAS)
        .chain(relativity::FORMULAS)
        .chain(quantum::FORMULAS)
}

#[cfg(test)]
pub(crate) mod test_util {
    pub const EPSILON: f64 = 1e-9;

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1e-300) < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_formula_ids_unique_and_kebab_case() {
        let mut seen = HashSet::new();
        for f in all_formulas() {
            assert!(seen.insert(f.id), "duplicate formula id {}", f.id);
            assert!(
                f.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "id {} is not kebab-case",
                f.id
            );
        }
        assert!(seen.len() >= 100, "expected at least 100 formulas, found {}", seen.len());
    }

    #[test]
    fn test_formulas_have_metadata() {
        for f in all_formulas() {
            assert!(!f.name.is_empty(), "{} has no name", f.id);
            assert!(!f.equation.is_empty(), "{} has no equation", f.id);
            assert!(!f.description.is_empty(), "{} has no description", f.id);
            assert!(!f.topic.is_empty(), "{} has no topic", f.id);
            assert!(!f.params.is_empty(), "{} declares no parameters", f.id);
        }
    }

    #[test]
    fn test_param_keys_unique_per_formula() {
        for f in all_formulas() {
            let mut keys = HashSet::new();
            for p in f.params {
                assert!(keys.insert(p.key), "{} declares '{}' twice", f.id, p.key);
                assert!(!crate::params::RESERVED_KEYS.contains(&p.key), "{} uses reserved key", f.id);
            }
        }
    }

    #[test]
    fn test_defaults_satisfy_own_rules() {
        for f in all_formulas() {
            for p in f.params {
                if let Some(default) = p.default {
                    assert!(
                        crate::validate::validate(default, p).is_ok(),
                        "{}: default for '{}' breaks its rules",
                        f.id,
                        p.key
                    );
                }
            }
        }
    }

    #[test]
    fn test_subject_parse() {
        for s in ALL_SUBJECTS {
            assert_eq!(Subject::parse(s.as_str()), Some(*s));
        }
        assert_eq!(Subject::parse("alchemy"), None);
    }

    #[test]
    fn test_args_length_mismatch() {
        assert!(args::<2>(&[1.0]).is_err());
        assert_eq!(args::<2>(&[1.0, 2.0]).unwrap(), [1.0, 2.0]);
    }
}
