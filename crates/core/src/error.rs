//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// configuration, invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier format failed structural validation (empty, wrong SEQ
    /// count, duplicate positions). Surfaced to the format-editing caller;
    /// nothing is persisted.
    #[error("format validation failed: {0}")]
    Validation(String),

    /// A single part's parameters are invalid (empty FIXED text, RANDOM
    /// length out of range, bad DATETIME pattern). Surfaced at generation
    /// time and aborts the whole call.
    #[error("part configuration invalid: {0}")]
    Configuration(String),

    /// A programming invariant was violated. Never expected in normal
    /// operation; callers should log loudly rather than default silently.
    #[error("internal consistency violation: {0}")]
    Consistency(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn consistency(msg: impl Into<String>) -> Self {
        Self::Consistency(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
