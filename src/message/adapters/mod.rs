//! Store adapters for the message board.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageStore`]: thread-safe in-memory storage for tests
//!   and local runs
//! - [`postgres::PostgresMessageStore`]: `PostgreSQL` persistence using Diesel
//!   with an r2d2 connection pool

pub mod memory;
pub mod postgres;
