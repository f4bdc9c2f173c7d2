//! # Error Types
//!
//! Structured error types for calc_core. Every calculator validates its
//! input eagerly and reports the first problem it finds, with enough context
//! for an API consumer to point at the offending field.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_span(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required numeric field is non-positive, or a required tag is
    /// missing or unrecognized
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The flexure quadratic has no real root inside (0, h0]
    #[error("No valid section: {reason}")]
    NoValidSection { reason: String },

    /// Reinforcement area exceeds the gross section area
    #[error("Invalid steel area: {as_mm2} mm² exceeds gross area {gross_area_mm2} mm²")]
    InvalidSteelArea { as_mm2: f64, gross_area_mm2: f64 },

    /// A batch request contained no items
    #[error("Batch contains no items")]
    EmptyBatch,

    /// An imported sheet has no data rows
    #[error("Sheet contains no data rows")]
    EmptySheet,

    /// JSON serialization/deserialization error at the request boundary
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoValidSection error
    pub fn no_valid_section(reason: impl Into<String>) -> Self {
        CalcError::NoValidSection {
            reason: reason.into(),
        }
    }

    /// Create an InvalidSteelArea error
    pub fn invalid_steel_area(as_mm2: f64, gross_area_mm2: f64) -> Self {
        CalcError::InvalidSteelArea { as_mm2, gross_area_mm2 }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NoValidSection { .. } => "NO_VALID_SECTION",
            CalcError::InvalidSteelArea { .. } => "INVALID_STEEL_AREA",
            CalcError::EmptyBatch => "EMPTY_BATCH",
            CalcError::EmptySheet => "EMPTY_SHEET",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject a non-positive value for a required field.
///
/// Shared by every calculator's `validate()`; NaN is rejected as well.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"))
    }
}
