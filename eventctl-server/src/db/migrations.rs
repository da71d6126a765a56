//! Schema bootstrap for the events table

use sqlx::SqlitePool;

/// Create the events table if it does not exist.
///
/// `AUTOINCREMENT` keeps ids monotonic: a deleted id is never reused.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running event migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            location TEXT NOT NULL,
            user_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
