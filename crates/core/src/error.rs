//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants describe a bad request from the caller. Neither is ever fatal
/// to the process; the HTTP layer turns them into 404 / 400 responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The named resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed to parse or violates a rule for the requested operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
