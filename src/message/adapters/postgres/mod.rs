//! `PostgreSQL` adapter for message persistence.

mod models;
mod repository;
mod schema;

pub use repository::{MessagePgPool, PostgresMessageStore};
