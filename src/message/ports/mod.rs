//! Port trait definitions for the message board.
//!
//! Ports define the interfaces the service needs from infrastructure.

pub mod repository;

pub use repository::{MessageStore, StoreResult};
