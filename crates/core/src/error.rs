//! Domain error model.

use thiserror::Error;

/// Result type used across the store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Each variant carries the human-readable detail string surfaced to the
/// caller; there is no richer taxonomy than variant + message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A request argument failed validation (empty query, bad price bounds).
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation would violate id uniqueness.
    #[error("{0}")]
    Conflict(String),

    /// The lookup/mutation target does not exist, or a search matched nothing.
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
