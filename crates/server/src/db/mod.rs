//! Database operations for the donor registry `SQLite` database.
//!
//! ## Tables
//!
//! - `donor` - Registered donors, `phone` is `UNIQUE`
//! - `admin_user` - Administrator accounts with Argon2id password hashes
//! - `tower_sessions` - Session storage (owned by `tower-sessions-sqlx-store`)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and are NOT run by the
//! server on startup. Run them via:
//! ```bash
//! cargo run -p blood-donation-cli -- migrate
//! ```

pub mod admin_users;
pub mod donors;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tower_sessions_sqlx_store::SqliteStore;

pub use admin_users::AdminUserRepository;
pub use donors::DonorRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique phone).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Errors that can occur while bringing the schema up to date.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// An application migration failed.
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Creating the session table failed.
    #[error("session store migration failed: {0}")]
    SessionStore(#[from] sqlx::Error),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not exist yet.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is malformed or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a single-connection in-memory pool.
///
/// Every connection to `sqlite::memory:` opens a fresh database, so the pool
/// holds exactly one connection and never recycles it.
///
/// # Errors
///
/// Returns `sqlx::Error` if `SQLite` cannot open the database.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Run the embedded migrations and create the session table.
///
/// # Errors
///
/// Returns `MigrationError` if either step fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrationError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;
    Ok(())
}
