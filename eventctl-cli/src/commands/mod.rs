//! Command implementations for eventctl CLI

pub mod migrate;
pub mod serve;

use clap::Args;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite";

/// Database connection arguments shared by commands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (SQLite)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}
