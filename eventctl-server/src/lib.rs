//! eventctl-server: HTTP CRUD service for events
//!
//! Exposes create/read/update/delete over a single `events` table
//! stored in SQLite. The storage handle is built once and injected
//! into the router state; handlers never reach for a global.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, EventRepo, EventStore, MemoryEventStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Event, EventDraft, ValidationError, DEFAULT_OWNER_ID};
