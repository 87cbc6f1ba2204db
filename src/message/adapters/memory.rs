//! In-memory implementation of the `MessageStore` port.
//!
//! Thread-safe store for tests and local runs without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{Message, MessageId, NewMessage},
    error::StoreError,
    ports::repository::{MessageStore, StoreResult},
};

/// In-memory implementation of [`MessageStore`].
///
/// Identifiers come from a counter that only moves forward, so a deleted
/// message's id is never handed out again.
///
/// # Example
///
/// ```
/// use message_board::message::adapters::memory::InMemoryMessageStore;
///
/// let store = InMemoryMessageStore::new();
/// assert_eq!(store.is_empty().ok(), Some(true));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    messages: BTreeMap<MessageId, Message>,
    last_id: i64,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the internal lock is poisoned.
    pub fn len(&self) -> StoreResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.messages.len())
    }

    /// Returns `true` if no messages are stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the internal lock is poisoned.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn lock_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn create(&self, message: NewMessage) -> StoreResult<Message> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let stored = Message::from_new(MessageId::new(state.last_id), message);
        state.messages.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<Message>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut messages: Vec<Message> = state.messages.values().cloned().collect();
        messages.sort_by_key(|message| (message.created_at(), message.id()));
        Ok(messages)
    }

    async fn find_by_id(&self, id: MessageId) -> StoreResult<Option<Message>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.messages.get(&id).cloned())
    }

    async fn find_by_body(&self, body: &str) -> StoreResult<Vec<Message>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .messages
            .values()
            .filter(|message| message.body() == body)
            .cloned()
            .collect())
    }

    async fn update_body(&self, id: MessageId, body: String) -> StoreResult<Message> {
        let mut state = self.state.write().map_err(lock_error)?;
        let message = state
            .messages
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        message.set_body(body);
        Ok(message.clone())
    }

    async fn delete(&self, id: MessageId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .messages
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
