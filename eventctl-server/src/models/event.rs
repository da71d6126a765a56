//! Event entity and its validated draft

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Owner assigned to every event.
///
/// Placeholder until requests carry an authenticated user.
pub const DEFAULT_OWNER_ID: i64 = 1;

/// Event record as stored and returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub user_id: i64,
}

impl Event {
    /// Build a stored event from a draft and its assigned id.
    pub fn from_draft(id: i64, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            user_id: DEFAULT_OWNER_ID,
        }
    }
}

/// Validated user-supplied fields of an event.
///
/// Used for both create and update; update overwrites all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    title: String,
    description: String,
    location: String,
}

impl EventDraft {
    /// Create a new draft, checking that every field is present.
    ///
    /// # Rules
    /// - Each field must be a non-empty string
    /// - Whitespace counts as content; values are stored as given
    ///
    /// # Example
    /// ```
    /// use eventctl_server::models::EventDraft;
    ///
    /// assert!(EventDraft::new("Standup", "Daily sync", "Room 4").is_ok());
    /// assert!(EventDraft::new("", "Daily sync", "Room 4").is_err());
    /// assert!(EventDraft::new("Standup", "   ", "Room 4").is_ok());
    /// ```
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title.into())?,
            description: required("description", description.into())?,
            location: required("location", location.into())?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value)
}
