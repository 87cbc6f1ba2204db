//! Message storage and orchestration for the board.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: pure types ([`domain::Message`], [`domain::NewMessage`], [`domain::MessageId`])
//! - **Ports**: the storage contract ([`ports::MessageStore`])
//! - **Adapters**: [`adapters::memory::InMemoryMessageStore`] and
//!   [`adapters::postgres::PostgresMessageStore`]
//! - **Services**: validation and orchestration ([`services::MessageBoardService`])
//!
//! # Example
//!
//! ```
//! use message_board::message::adapters::memory::InMemoryMessageStore;
//! use message_board::message::services::{CreateMessageRequest, MessageBoardService};
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let service = MessageBoardService::new(
//!     Arc::new(InMemoryMessageStore::new()),
//!     Arc::new(DefaultClock),
//! );
//! let message = service
//!     .create(CreateMessageRequest::new("Hello 👋", "Liza"))
//!     .await
//!     .expect("create should succeed");
//! assert_eq!(message.body(), "Hello 👋");
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
