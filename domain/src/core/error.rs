//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Message cannot be empty")]
    EmptyInput,
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidState`]
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        DomainError::InvalidState(detail.into())
    }

    /// Check if this error means a prerequisite step was skipped
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, DomainError::InvalidState(_))
    }
}
