//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The host supplied input that is not well-formed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A named option list uses characters outside `[A-Za-z0-9_\-/]`.
    #[error("invalid choice name: {0}")]
    InvalidChoiceName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
