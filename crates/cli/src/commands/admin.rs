//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! blood-cli admin create --username admin --password 'long random password'
//!
//! # Keep the password out of shell history
//! BLOOD_ADMIN_PASSWORD='long random password' blood-cli admin create -u admin
//! ```
//!
//! # Environment Variables
//!
//! - `BLOOD_DATABASE_URL` - `SQLite` connection string
//! - `BLOOD_ADMIN_PASSWORD` - Password for `admin create` when `--password` is omitted

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use thiserror::Error;

use blood_donation_core::AdminUserId;
use blood_donation_server::db;
use blood_donation_server::services::{AuthError, AuthService};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// User already exists.
    #[error("Admin user already exists: {0}")]
    UserExists(String),

    /// Username or password rejected, or the account could not be stored.
    #[error(transparent)]
    Auth(AuthError),
}

/// Create a new admin user.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string
/// * `username` - Login name
/// * `password` - Plain-text password, hashed with Argon2id before storage
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `AdminError::UserExists` if the username is taken, or
/// `AdminError::Auth` if validation or storage fails.
pub async fn create_user(
    database_url: &SecretString,
    username: &str,
    password: &SecretString,
) -> Result<AdminUserId, AdminError> {
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url).await?;

    create_user_in(&pool, username, password).await
}

async fn create_user_in(
    pool: &SqlitePool,
    username: &str,
    password: &SecretString,
) -> Result<AdminUserId, AdminError> {
    tracing::info!("Creating admin user: {}", username);

    let user = AuthService::new(pool)
        .create_admin(username, password.expose_secret())
        .await
        .map_err(|e| match e {
            AuthError::UserAlreadyExists => AdminError::UserExists(username.trim().to_owned()),
            other => AdminError::Auth(other),
        })?;

    tracing::info!("Admin user created with ID: {}", user.id);
    Ok(user.id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = db::create_memory_pool().await.unwrap();
        db::migrate(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_user_then_login() {
        let pool = test_pool().await;
        let password = SecretString::from("correct horse battery");

        let id = create_user_in(&pool, "admin", &password).await.unwrap();

        let user = AuthService::new(&pool)
            .login("admin", "correct horse battery")
            .await
            .unwrap();
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_create_user_twice() {
        let pool = test_pool().await;
        let password = SecretString::from("correct horse battery");

        create_user_in(&pool, "admin", &password).await.unwrap();
        let err = create_user_in(&pool, "admin", &password).await.unwrap_err();
        assert!(matches!(err, AdminError::UserExists(name) if name == "admin"));
    }

    #[tokio::test]
    async fn test_create_user_weak_password() {
        let pool = test_pool().await;
        let err = create_user_in(&pool, "admin", &SecretString::from("short"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdminError::Auth(AuthError::WeakPassword(_))));
    }
}
