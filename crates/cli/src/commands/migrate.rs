//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! blood-cli migrate
//! blood-cli --database-url sqlite://other.db?mode=rwc migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BLOOD_DATABASE_URL` - `SQLite` connection string
//!
//! Migration files live in `crates/server/migrations/` and are embedded into
//! the server library at build time.

use secrecy::SecretString;

use blood_donation_server::db::{self, MigrationError};

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Could not open the database.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration step failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

/// Run all migrations against the configured database.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn run(database_url: &SecretString) -> Result<(), MigrateError> {
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url).await?;

    tracing::info!("Running migrations...");
    db::migrate(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
