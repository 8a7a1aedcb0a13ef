//! # Error Types
//!
//! Structured error types for formula_core. Every message names the offending
//! parameter (label and key) or the physical condition that was violated, so a
//! caller can fix the request without reading the formula source.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{FormulaError, FormulaResult};
//!
//! fn check_radius(r: f64) -> FormulaResult<()> {
//!     if r == 0.0 {
//!         return Err(FormulaError::must_be_non_zero("r", "Radius"));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_radius(0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Radius (r) cannot be zero.");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula_core operations
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Broad classification of failures.
///
/// The HTTP layer maps kinds to status codes; `NotFound` becomes 404,
/// `Internal` 500, everything else is a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing, non-numeric or non-finite input
    InputType,
    /// Sign, zero, integrality or cross-parameter domain constraint violated
    DomainViolation,
    /// Denominator or precondition is exactly zero/undefined with no limit
    Singularity,
    /// Input exceeds a hard physical ceiling (light speed, absolute zero)
    PhysicalBound,
    /// Formula variant does not apply to the input regime
    NotApplicable,
    /// Unknown formula or explanation record
    NotFound,
    /// Data loading or unexpected failures
    Internal,
}

impl ErrorKind {
    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// Structured error type for formula evaluation and lookup.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormulaError {
    /// A required parameter was not supplied and has no default
    #[error("{label} ({param}) is required.")]
    MissingParameter { param: String, label: String },

    /// Value is not a finite real number
    #[error("{label} ({param}) must be a finite number.")]
    InvalidType { param: String, label: String },

    /// The request payload is not a flat object of parameters
    #[error("Malformed request: {reason}")]
    MalformedPayload { reason: String },

    #[error("{label} ({param}) must be positive.")]
    MustBePositive { param: String, label: String },

    #[error("{label} ({param}) cannot be negative.")]
    MustBeNonNegative { param: String, label: String },

    #[error("{label} ({param}) cannot be zero.")]
    MustBeNonZero { param: String, label: String },

    #[error("{label} ({param}) must be an integer.")]
    MustBeInteger { param: String, label: String },

    /// Rounding precision outside 0-16 or not an integer
    #[error("Precision (digits) must be an integer between 0 and 16, got {value}.")]
    InvalidPrecision { value: String },

    /// A cross-parameter domain constraint failed
    #[error("{reason}")]
    OutOfDomain { reason: String },

    /// Denominator or radicand makes the expression undefined
    #[error("{reason}")]
    Singularity { reason: String },

    /// Quantum transition between identical levels
    #[error("Initial and final energy levels must differ (both are {level}).")]
    DegenerateTransition { level: String },

    #[error("{label} ({param}) cannot exceed the speed of light (c).")]
    ExceedsSpeedOfLight { param: String, label: String },

    #[error("{label} ({param}) cannot be below absolute zero.")]
    BelowAbsoluteZero { param: String, label: String },

    /// Formula does not apply to the given regime
    #[error("{reason}")]
    NotApplicable { reason: String },

    #[error("Unknown formula: '{id}'")]
    UnknownFormula { id: String },

    #[error("No explanation for '{equation_id}' in subject '{subject}' (language '{language}')")]
    ExplanationNotFound {
        subject: String,
        equation_id: String,
        language: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FormulaError {
    pub fn missing_parameter(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::MissingParameter {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn invalid_type(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::InvalidType {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        FormulaError::MalformedPayload { reason: reason.into() }
    }

    pub fn must_be_positive(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::MustBePositive {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn must_be_non_negative(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::MustBeNonNegative {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn must_be_non_zero(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::MustBeNonZero {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn must_be_integer(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::MustBeInteger {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn out_of_domain(reason: impl Into<String>) -> Self {
        FormulaError::OutOfDomain { reason: reason.into() }
    }

    pub fn singularity(reason: impl Into<String>) -> Self {
        FormulaError::Singularity { reason: reason.into() }
    }

    pub fn exceeds_light_speed(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::ExceedsSpeedOfLight {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn below_absolute_zero(param: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::BelowAbsoluteZero {
            param: param.into(),
            label: label.into(),
        }
    }

    pub fn not_applicable(reason: impl Into<String>) -> Self {
        FormulaError::NotApplicable { reason: reason.into() }
    }

    pub fn unknown_formula(id: impl Into<String>) -> Self {
        FormulaError::UnknownFormula { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FormulaError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error into the service-level taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::MissingParameter { .. }
            | FormulaError::InvalidType { .. }
            | FormulaError::MalformedPayload { .. } => ErrorKind::InputType,
            FormulaError::MustBePositive { .. }
            | FormulaError::MustBeNonNegative { .. }
            | FormulaError::MustBeNonZero { .. }
            | FormulaError::MustBeInteger { .. }
            | FormulaError::InvalidPrecision { .. }
            | FormulaError::OutOfDomain { .. } => ErrorKind::DomainViolation,
            FormulaError::Singularity { .. } | FormulaError::DegenerateTransition { .. } => {
                ErrorKind::Singularity
            }
            FormulaError::ExceedsSpeedOfLight { .. } | FormulaError::BelowAbsoluteZero { .. } => {
                ErrorKind::PhysicalBound
            }
            FormulaError::NotApplicable { .. } => ErrorKind::NotApplicable,
            FormulaError::UnknownFormula { .. } | FormulaError::ExplanationNotFound { .. } => {
                ErrorKind::NotFound
            }
            FormulaError::SerializationError { .. }
            | FormulaError::FileError { .. }
            | FormulaError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormulaError::MissingParameter { .. } => "MISSING_PARAMETER",
            FormulaError::InvalidType { .. } => "INVALID_TYPE",
            FormulaError::MalformedPayload { .. } => "MALFORMED_PAYLOAD",
            FormulaError::MustBePositive { .. } => "MUST_BE_POSITIVE",
            FormulaError::MustBeNonNegative { .. } => "MUST_BE_NON_NEGATIVE",
            FormulaError::MustBeNonZero { .. } => "MUST_BE_NON_ZERO",
            FormulaError::MustBeInteger { .. } => "MUST_BE_INTEGER",
            FormulaError::InvalidPrecision { .. } => "INVALID_PRECISION",
            FormulaError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            FormulaError::Singularity { .. } => "SINGULARITY",
            FormulaError::DegenerateTransition { .. } => "DEGENERATE_TRANSITION",
            FormulaError::ExceedsSpeedOfLight { .. } => "EXCEEDS_SPEED_OF_LIGHT",
            FormulaError::BelowAbsoluteZero { .. } => "BELOW_ABSOLUTE_ZERO",
            FormulaError::NotApplicable { .. } => "NOT_APPLICABLE",
            FormulaError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            FormulaError::ExplanationNotFound { .. } => "EXPLANATION_NOT_FOUND",
            FormulaError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FormulaError::FileError { .. } => "FILE_ERROR",
            FormulaError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FormulaError::must_be_non_zero("r", "Radius");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MustBeNonZero\""));
        let roundtrip: FormulaError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_messages_name_parameter() {
        assert_eq!(
            FormulaError::must_be_non_zero("r", "Radius").to_string(),
            "Radius (r) cannot be zero."
        );
        assert_eq!(
            FormulaError::must_be_non_negative("m", "Mass").to_string(),
            "Mass (m) cannot be negative."
        );
        assert_eq!(
            FormulaError::exceeds_light_speed("v", "Velocity").to_string(),
            "Velocity (v) cannot exceed the speed of light (c)."
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FormulaError::missing_parameter("v", "Velocity").error_code(), "MISSING_PARAMETER");
        assert_eq!(FormulaError::unknown_formula("nope").error_code(), "UNKNOWN_FORMULA");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FormulaError::invalid_type("v", "Velocity").kind(), ErrorKind::InputType);
        assert_eq!(FormulaError::must_be_integer("n", "Level").kind(), ErrorKind::DomainViolation);
        assert_eq!(FormulaError::singularity("x").kind(), ErrorKind::Singularity);
        assert_eq!(FormulaError::exceeds_light_speed("v", "Velocity").kind(), ErrorKind::PhysicalBound);
        assert_eq!(FormulaError::not_applicable("x").kind(), ErrorKind::NotApplicable);
        assert_eq!(FormulaError::unknown_formula("x").kind(), ErrorKind::NotFound);
        assert!(!ErrorKind::Internal.is_client_error());
        assert!(ErrorKind::Singularity.is_client_error());
    }
}
