//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data. Listings and
//! inquiries each live in their own table; a row write is atomic, which is
//! all the API contract requires.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Maximum number of connection attempts at startup.
pub const CONNECT_ATTEMPTS: u32 = 5;

/// Fixed delay between connection attempts. No backoff growth.
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Connect to the database with bounded, sequential retry.
///
/// Attempts up to [`CONNECT_ATTEMPTS`] times with a constant
/// [`CONNECT_RETRY_DELAY`] between attempts and returns the last error
/// once exhausted. The caller decides whether exhaustion is fatal.
pub async fn connect_with_retry(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let mut retries_left = CONNECT_ATTEMPTS;
    loop {
        tracing::info!("Connecting to database at {:?}", db_path);
        match init_database(db_path).await {
            Ok(pool) => {
                tracing::info!("Database connected successfully");
                return Ok(pool);
            }
            Err(err) => {
                retries_left -= 1;
                tracing::error!(
                    "Database connection failed. Retries left: {}. Error: {}",
                    retries_left,
                    err
                );
                if retries_left == 0 {
                    return Err(err);
                }
                tokio::time::sleep(CONNECT_RETRY_DELAY).await;
            }
        }
    }
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Create tables if they don't exist
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            brand TEXT NOT NULL,
            price REAL NOT NULL,
            images TEXT NOT NULL,
            description TEXT NOT NULL,
            year INTEGER NOT NULL,
            fuel_type TEXT NOT NULL,
            driven TEXT NOT NULL,
            transmission TEXT NOT NULL,
            ownership TEXT NOT NULL,
            registration TEXT NOT NULL,
            color TEXT NOT NULL,
            body_type TEXT NOT NULL,
            is_sold INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            whatsapp TEXT NOT NULL,
            budget TEXT NOT NULL,
            interested_car TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the newest-first listing scan
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_cars_created_at ON cars(created_at);")
        .execute(pool)
        .await?;

    Ok(())
}
