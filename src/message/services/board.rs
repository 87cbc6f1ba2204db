//! Service layer for the message board.
//!
//! Provides [`MessageBoardService`], which validates requests, stamps new
//! messages with the clock and delegates persistence to a [`MessageStore`].

use crate::message::{
    domain::{Message, MessageId, NewMessage},
    error::{StoreError, ValidationError},
    ports::MessageStore,
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for posting a new message.
///
/// Both fields are optional at the type level so that a missing or `null`
/// value surfaces as a [`ValidationError`] rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateMessageRequest {
    /// Message text. Empty strings are allowed.
    #[serde(default)]
    pub body: Option<String>,
    /// Author name. Empty strings are allowed.
    #[serde(default)]
    pub username: Option<String>,
}

impl CreateMessageRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(body: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            username: Some(username.into()),
        }
    }
}

/// Request payload for a partial message update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateMessageRequest {
    /// Replacement body; `None` leaves the body unchanged.
    #[serde(default)]
    pub body: Option<String>,
}

impl UpdateMessageRequest {
    /// Creates a request replacing the body.
    #[must_use]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// Service-level errors for message board operations.
#[derive(Debug, Error)]
pub enum MessageBoardError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MessageBoardError {
    /// Returns `true` when the error means the message does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Store(err) => err.is_not_found(),
            Self::Validation(_) => false,
        }
    }
}

/// Result type for message board service operations.
pub type MessageBoardResult<T> = Result<T, MessageBoardError>;

/// Message board orchestration service.
pub struct MessageBoardService<S, C>
where
    S: MessageStore + ?Sized,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for MessageBoardService<S, C>
where
    S: MessageStore + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> MessageBoardService<S, C>
where
    S: MessageStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new service over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Posts a new message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::Validation`] when `body` or `username` is
    /// missing, or [`MessageBoardError::Store`] when the insert fails.
    pub async fn create(&self, request: CreateMessageRequest) -> MessageBoardResult<Message> {
        let CreateMessageRequest { body, username } = request;
        let body_val = body.ok_or(ValidationError::MissingBody)?;
        let username_val = username.ok_or(ValidationError::MissingUsername)?;

        let draft = NewMessage::new(body_val, username_val, &*self.clock);
        let message = self.store.create(draft).await?;
        info!(id = %message.id(), username = message.username(), "message created");
        Ok(message)
    }

    /// Returns every message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::Store`] when the query fails.
    pub async fn list_all(&self) -> MessageBoardResult<Vec<Message>> {
        Ok(self.store.list_all().await?)
    }

    /// Returns a single message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] (wrapped) when no message has `id`.
    pub async fn get(&self, id: MessageId) -> MessageBoardResult<Message> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id).into())
    }

    /// Returns every message whose body matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError::Store`] when the query fails.
    pub async fn find_by_body(&self, body: &str) -> MessageBoardResult<Vec<Message>> {
        Ok(self.store.find_by_body(body).await?)
    }

    /// Applies a partial update to a message.
    ///
    /// An update without a body returns the current message unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] (wrapped) when no message has `id`.
    pub async fn update(
        &self,
        id: MessageId,
        request: UpdateMessageRequest,
    ) -> MessageBoardResult<Message> {
        match request.body {
            Some(body) => {
                let message = self.store.update_body(id, body).await?;
                info!(%id, "message updated");
                Ok(message)
            }
            None => {
                debug!(%id, "empty update; returning current message");
                self.get(id).await
            }
        }
    }

    /// Deletes a message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] (wrapped) when no message has `id`.
    pub async fn delete(&self, id: MessageId) -> MessageBoardResult<()> {
        self.store.delete(id).await?;
        info!(%id, "message deleted");
        Ok(())
    }
}
