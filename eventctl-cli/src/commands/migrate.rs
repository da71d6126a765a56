//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use eventctl_server::db::{create_pool, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the database file if needed and apply the schema.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let url = &args.database.database_url;

    let pool = create_pool(url)
        .await
        .with_context(|| format!("Failed to open database {}", url))?;

    migrations::run(&pool)
        .await
        .context("Failed to create events table")?;

    pool.close().await;
    println!("Schema up to date: {}", url);
    Ok(())
}
