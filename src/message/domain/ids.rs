//! Identifier newtype for persisted messages.
//!
//! Message identifiers are assigned by the store on insertion, so unlike the
//! draft types there is no way to mint a fresh one in the domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a message.
///
/// # Examples
///
/// ```
/// use message_board::message::domain::MessageId;
///
/// let id = MessageId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i64);

impl MessageId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for MessageId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
