//! `PostgreSQL` store implementation for board messages.

use super::{
    models::{MessageRow, NewMessageRow},
    schema::messages,
};
use crate::message::{
    domain::{Message, MessageId, NewMessage},
    error::StoreError,
    ports::repository::{MessageStore, StoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;
use tracing::{debug, info};

/// SQL creating the `messages` table when it does not exist yet.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-18-000000_create_messages/up.sql");

/// `PostgreSQL` connection pool type used by the message store.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed message store.
///
/// Every operation checks a connection out of the pool on a blocking thread
/// and hands it back when the closure returns, whether or not it failed.
///
/// # Example
///
/// ```ignore
/// use message_board::message::adapters::postgres::PostgresMessageStore;
///
/// let store = PostgresMessageStore::connect("postgres://...", 10)?;
/// store.ensure_schema().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresMessageStore {
    pool: MessagePgPool,
}

#[derive(Debug, Error)]
#[error("message id must be positive, found {0}")]
struct NonPositiveId(i64);

impl PostgresMessageStore {
    /// Creates a store from an existing connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool of at most `max_size` connections to `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the pool cannot open its
    /// initial connections.
    pub fn connect(database_url: &str, max_size: u32) -> StoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(StoreError::persistence)?;
        info!(max_size, "connected message store pool");
        Ok(Self::new(pool))
    }

    /// Creates the `messages` table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the DDL fails.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_SCHEMA_SQL)
                .map_err(StoreError::persistence)
        })
        .await?;
        debug!("message schema ready");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StoreError::persistence)?
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn create(&self, message: NewMessage) -> StoreResult<Message> {
        let new_row = NewMessageRow {
            body: message.body().to_owned(),
            username: message.username().to_owned(),
            created_at: message.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)?;
            row_to_message(row)
        })
        .await
    }

    async fn list_all(&self) -> StoreResult<Vec<Message>> {
        self.run_blocking(|connection| {
            let rows = messages::table
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> StoreResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .find(id.value())
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()?;
            row.map(row_to_message).transpose()
        })
        .await
    }

    async fn find_by_body(&self, body: &str) -> StoreResult<Vec<Message>> {
        let body_val = body.to_owned();
        self.run_blocking(move |connection| {
            let rows = messages::table
                .filter(messages::body.eq(&body_val))
                .order(messages::id.asc())
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn update_body(&self, id: MessageId, body: String) -> StoreResult<Message> {
        self.run_blocking(move |connection| {
            let row = diesel::update(messages::table.find(id.value()))
                .set(messages::body.eq(&body))
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)
                .optional()?
                .ok_or(StoreError::NotFound(id))?;
            row_to_message(row)
        })
        .await
    }

    async fn delete(&self, id: MessageId) -> StoreResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(messages::table.find(id.value())).execute(connection)?;
            if deleted == 0 {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_message(row: MessageRow) -> StoreResult<Message> {
    let MessageRow {
        id,
        body,
        username,
        created_at,
    } = row;

    if id <= 0 {
        return Err(StoreError::invalid_persisted_data(NonPositiveId(id)));
    }
    Ok(Message::from_persisted(
        MessageId::new(id),
        body,
        username,
        created_at,
    ))
}
