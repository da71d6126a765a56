//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 10 connections) - no Arc<Mutex<Connection>>
//! - Pool is constructed once and passed in, never global
//! - Single-statement operations, no multi-statement transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
