//! Message board: a small REST backend for posting short messages.
//!
//! A single persisted entity, [`message::domain::Message`], is exposed over
//! HTTP with create, list, update and delete operations, backed by
//! `PostgreSQL` or an in-memory store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: pure message types with no infrastructure dependencies
//! - **Ports**: the [`message::ports::MessageStore`] trait
//! - **Adapters**: `PostgreSQL` (Diesel) and in-memory stores
//! - **Services**: request validation and orchestration
//!
//! # Modules
//!
//! - [`message`]: domain, storage and service layers
//! - [`http`]: axum routes, error mapping and the server
//! - [`config`]: environment configuration
//! - [`telemetry`]: tracing setup

pub mod config;
pub mod http;
pub mod message;
pub mod telemetry;
