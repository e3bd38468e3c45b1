//! Domain error types.

use thiserror::Error;

/// Errors raised by domain rules before anything touches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A user cannot follow themselves")]
    SelfFollow,
}
