//! Store port for message persistence.
//!
//! Defines the storage-agnostic interface the board service relies on, so
//! `PostgreSQL` and in-memory stores are interchangeable.

use crate::message::{
    domain::{Message, MessageId, NewMessage},
    error::StoreError,
};
use async_trait::async_trait;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for message persistence operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - identifiers are assigned on insert and never reused
/// - `created_at` is stored exactly as provided by the draft
/// - each call acquires and releases its own storage handle
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Inserts a draft and returns the stored message with its new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the insert fails.
    async fn create(&self, message: NewMessage) -> StoreResult<Message>;

    /// Returns every stored message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails.
    async fn list_all(&self) -> StoreResult<Vec<Message>>;

    /// Retrieves a message by identifier.
    ///
    /// Returns `None` if no message has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails.
    async fn find_by_id(&self, id: MessageId) -> StoreResult<Option<Message>>;

    /// Returns all messages whose body matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails.
    async fn find_by_body(&self, body: &str) -> StoreResult<Vec<Message>>;

    /// Replaces the body of an existing message and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the message does not exist.
    async fn update_body(&self, id: MessageId, body: String) -> StoreResult<Message>;

    /// Removes a message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the message does not exist.
    async fn delete(&self, id: MessageId) -> StoreResult<()>;
}
