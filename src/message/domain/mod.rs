//! Domain types for the message board.
//!
//! Pure types with no infrastructure dependencies.

mod ids;
mod message;

pub use ids::MessageId;
pub use message::{Message, NewMessage};
