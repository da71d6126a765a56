//! Storage trait shared by the SQLite repository and test doubles

use async_trait::async_trait;

use crate::models::{Event, EventDraft};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    /// Missing event with the given id.
    pub fn event_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "event",
            id: id.to_string(),
        }
    }
}

/// Event persistence operations.
///
/// Every operation is independent; implementations need no locking
/// beyond what their backing store provides.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a new event owned by the default owner, returning it with its id.
    async fn create(&self, draft: EventDraft) -> Result<Event, DbError>;

    /// All events in insertion order.
    async fn list(&self) -> Result<Vec<Event>, DbError>;

    /// A single event, or `DbError::NotFound`.
    async fn get(&self, id: i64) -> Result<Event, DbError>;

    /// Overwrite title/description/location, then re-read.
    ///
    /// A missing id updates nothing and the re-read fails with `NotFound`.
    async fn update(&self, id: i64, draft: EventDraft) -> Result<Event, DbError>;

    /// Delete an event, returning what was deleted.
    async fn delete(&self, id: i64) -> Result<Event, DbError>;
}
