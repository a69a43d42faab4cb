//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only: validation, invariants and
/// malformed identifiers.
/// Port adapters define their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated (e.g. negative stock).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("quantity must be positive");
        assert_eq!(err.to_string(), "validation failed: quantity must be positive");

        let err = DomainError::invariant("stock cannot go negative");
        assert_eq!(err.to_string(), "invariant violated: stock cannot go negative");
    }

    #[test]
    fn invalid_id_display_includes_reason() {
        let err = DomainError::invalid_id("LedgerId: bad length");
        assert_eq!(err.to_string(), "invalid identifier: LedgerId: bad length");
    }
}
