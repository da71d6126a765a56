//! In-process event store
//!
//! Same semantics as `EventRepo`: monotonic ids that are never reused,
//! insertion-ordered listing, update-then-reread. Used as a test double
//! for the HTTP layer.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, EventStore};
use crate::models::{Event, EventDraft};

#[derive(Debug, Default)]
struct MemoryInner {
    last_id: i64,
    events: BTreeMap<i64, Event>,
}

/// Event store held in memory
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn create(&self, draft: EventDraft) -> Result<Event, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let event = Event::from_draft(inner.last_id, draft);
        inner.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<Event>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.events.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Event, DbError> {
        let inner = self.inner.read().await;
        inner
            .events
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::event_not_found(id))
    }

    async fn update(&self, id: i64, draft: EventDraft) -> Result<Event, DbError> {
        {
            let mut inner = self.inner.write().await;
            if let Some(event) = inner.events.get_mut(&id) {
                event.title = draft.title().to_owned();
                event.description = draft.description().to_owned();
                event.location = draft.location().to_owned();
            }
        }
        self.get(id).await
    }

    async fn delete(&self, id: i64) -> Result<Event, DbError> {
        let mut inner = self.inner.write().await;
        inner
            .events
            .remove(&id)
            .ok_or_else(|| DbError::event_not_found(id))
    }
}
