//! Domain models with validation at construction
//!
//! User input is validated when an `EventDraft` is built.
//! Invalid input returns ValidationError, not panic.

pub mod event;
pub mod validation;

pub use event::{Event, EventDraft, DEFAULT_OWNER_ID};
pub use validation::ValidationError;
