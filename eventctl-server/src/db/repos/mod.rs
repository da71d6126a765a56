//! Repository implementations for event storage
//!
//! `EventStore` is the seam handlers depend on:
//! - `EventRepo` runs SQL against the SQLite pool
//! - `MemoryEventStore` keeps events in process, for tests

pub mod events;
pub mod memory;
pub mod store;

pub use events::EventRepo;
pub use memory::MemoryEventStore;
pub use store::{DbError, EventStore};
