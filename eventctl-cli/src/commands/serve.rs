//! HTTP server command
//!
//! Opens the database, applies the schema and runs the events API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use eventctl_server::db::{create_pool, migrations};
use eventctl_server::http::{run_server, ServerConfig, DEFAULT_BIND_ADDR};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "EVENTCTL_BIND", default_value_t = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting eventctl server on {}", args.bind);

    let pool = create_pool(&args.database.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to create events table")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
