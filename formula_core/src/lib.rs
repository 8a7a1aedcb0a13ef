//! # formula_core - Physics Formula Evaluation Engine
//!
//! `formula_core` evaluates closed-form physics equations from loosely typed
//! request parameters. Every formula goes through the same discipline:
//! validate each input against its physical constraints, evaluate, round, and
//! report failures with a message that names the offending parameter.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every evaluation is a pure function of its inputs
//! - **JSON-First**: parameters arrive as JSON, results and errors leave as JSON
//! - **Rich Errors**: structured error types with stable codes, not just strings
//! - **Static Registry**: formulas are plain data tables, no reflection
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::adapter::handle;
//! use serde_json::json;
//!
//! let reply = handle("centripetal-acceleration", &json!({"v": 10, "r": 5}), false);
//! assert_eq!(serde_json::to_value(&reply).unwrap(), json!({"result": 20.0}));
//!
//! let reply = handle("centripetal-acceleration", &json!({"v": 5, "r": 0}), false);
//! assert_eq!(
//!     serde_json::to_value(&reply).unwrap()["error"],
//!     "Radius (r) cannot be zero."
//! );
//! ```
//!
//! ## Modules
//!
//! - [`validate`] - per-parameter validation rules
//! - [`format`] - rounding and result serialization
//! - [`params`] - request parameter sets
//! - [`formulas`] - the formula tables, grouped by subject
//! - [`registry`] - identifier lookup and the evaluation pipeline
//! - [`adapter`] - transport-facing request handling
//! - [`explanations`] - multilingual formula descriptions
//! - [`constants`] - physical constants used as parameter defaults
//! - [`errors`] - structured error types

pub mod adapter;
pub mod constants;
pub mod errors;
pub mod explanations;
pub mod format;
pub mod formulas;
pub mod params;
pub mod registry;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use adapter::{handle, Reply};
pub use errors::{ErrorKind, FormulaError, FormulaResult};
pub use explanations::{ExplanationStore, FormulaDescriptor};
pub use format::{Outcome, Precision};
pub use formulas::{Formula, Subject};
pub use params::ParameterSet;
