//! Diesel row models for message persistence.

use super::schema::messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Message text.
    pub body: String,
    /// Author name.
    pub username: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for message records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message text.
    pub body: String,
    /// Author name.
    pub username: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}
