//! Error types for message validation and persistence.
//!
//! Uses `thiserror` for typed variants that callers can match on.

use super::domain::MessageId;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while validating an incoming message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The message body is missing or null.
    #[error("message body is required")]
    MissingBody,

    /// The username is missing or null.
    #[error("username is required")]
    MissingUsername,
}

impl ValidationError {
    /// Returns the name of the offending request field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingBody => "body",
            Self::MissingUsername => "username",
        }
    }
}

/// Errors returned by message store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No message has the requested identifier.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// A stored row could not be turned back into a message.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Connection, pool or query failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a data-quality error from a stored row.
    #[must_use]
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
