//! The message entity and its unsaved draft.

use super::MessageId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A persisted board message.
///
/// Serialises to the JSON shape returned by the HTTP layer:
/// `{"id", "body", "username", "created_at"}`.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - `created_at` is set once at insertion and never changes
/// - only `body` may be mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    body: String,
    username: String,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Assembles a message from its stored parts.
    ///
    /// Only stores should call this; everyone else receives messages from a
    /// store.
    #[must_use]
    pub const fn from_persisted(
        id: MessageId,
        body: String,
        username: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            body,
            username,
            created_at,
        }
    }

    /// Assigns an identifier to a draft, producing the stored message.
    #[must_use]
    pub fn from_new(id: MessageId, draft: NewMessage) -> Self {
        let NewMessage {
            body,
            username,
            created_at,
        } = draft;
        Self::from_persisted(id, body, username, created_at)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the author's username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the insertion timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the body, leaving every other field untouched.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

/// A validated message that has not been stored yet.
///
/// # Examples
///
/// ```
/// use message_board::message::domain::NewMessage;
/// use mockable::DefaultClock;
///
/// let draft = NewMessage::new("Hello 👋", "Liza", &DefaultClock);
/// assert_eq!(draft.body(), "Hello 👋");
/// assert_eq!(draft.username(), "Liza");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    body: String,
    username: String,
    created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Creates a draft stamped with the clock's current UTC time.
    #[must_use]
    pub fn new(body: impl Into<String>, username: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            body: body.into(),
            username: username.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the draft body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the draft author.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the timestamp the message will be stored with.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
