//! Route handlers organized by resource

pub mod events;
pub mod root;
