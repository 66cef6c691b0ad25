//! Cross-cutting error types for casedesk.
//!
//! Domain-specific errors (`ConfigError`, `AuthError`, `ApiError`) live in
//! their respective crates; this module holds only what the core types
//! themselves can raise.

use thiserror::Error;

/// Errors raised while parsing or validating core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A label from user input or the wire does not match a known variant.
    #[error("unknown {field}: '{value}'")]
    UnknownLabel {
        field: &'static str,
        value: String,
    },

    /// Data failed validation (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),
}
