//! Roster Storage
//!
//! `SQLite` persistence for Roster user records.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` slice owns its queries and row mapping
//! - **Keyset Pagination**: pages are addressed by an opaque cursor encoding
//!   the last row's creation time (see [`cursor`])
//! - **Repository Context**: [`LocalUserRepository`] binds the slice to a pool
//!   and implements `roster_core::UserRepository`
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{LocalUserRepository, create_pool, run_migrations};
//! use roster_core::UserRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://roster.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let repository = LocalUserRepository::new(pool);
//! let page = repository.fetch("", 10).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod cursor;

// Vertical slices
pub mod users;

pub use context::LocalUserRepository;
pub use cursor::{decode_cursor, encode_cursor};
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("sqlite pool created");

    Ok(pool)
}
