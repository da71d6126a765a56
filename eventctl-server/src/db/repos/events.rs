//! Event repository backed by SQLite
//!
//! Each operation is one or two single statements:
//! - create: INSERT, id from last_insert_rowid
//! - update: UPDATE then re-read (no existence check up front)
//! - delete: read first so the deleted row can be returned

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{DbError, EventStore};
use crate::models::{Event, EventDraft, DEFAULT_OWNER_ID};

/// Event repository
#[derive(Debug, Clone)]
pub struct EventRepo {
    pool: SqlitePool,
}

impl EventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepo {
    async fn create(&self, draft: EventDraft) -> Result<Event, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO events (title, description, location, user_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(draft.title())
        .bind(draft.description())
        .bind(draft.location())
        .bind(DEFAULT_OWNER_ID)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "event inserted");

        Ok(Event::from_draft(id, draft))
    }

    async fn list(&self) -> Result<Vec<Event>, DbError> {
        let events: Vec<Event> = sqlx::query_as(
            r#"
            SELECT id, title, description, location, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn get(&self, id: i64) -> Result<Event, DbError> {
        let event: Event = sqlx::query_as(
            r#"
            SELECT id, title, description, location, user_id
            FROM events
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::event_not_found(id))?;

        Ok(event)
    }

    async fn update(&self, id: i64, draft: EventDraft) -> Result<Event, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = ?1, description = ?2, location = ?3
            WHERE id = ?4
            "#,
        )
        .bind(draft.title())
        .bind(draft.description())
        .bind(draft.location())
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "event updated");

        self.get(id).await
    }

    async fn delete(&self, id: i64) -> Result<Event, DbError> {
        let event = self.get(id).await?;

        sqlx::query("DELETE FROM events WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, "event deleted");
        Ok(event)
    }
}
