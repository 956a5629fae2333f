//! Authentication service.
//!
//! Admin accounts sign in with a username and password. Passwords are stored
//! as Argon2id PHC strings and accounts are created from the CLI.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::{AdminUserRepository, RepositoryError};
use crate::models::AdminUser;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length.
const MAX_USERNAME_LENGTH: usize = 64;

/// Authentication service.
pub struct AuthService<'a> {
    users: AdminUserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: AdminUserRepository::new(pool),
        }
    }

    /// Create an admin account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username is empty or too long.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    #[instrument(skip(self, password))]
    pub async fn create_admin(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let username = validate_username(username)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(username, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(admin_id = %user.id, "Admin user created");
        Ok(user)
    }

    /// Login with username and password.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is wrong.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let (user, password_hash) = self
            .users
            .get_password_hash(username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Validate a username and return it trimmed.
fn validate_username(username: &str) -> Result<&str, AuthError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(AuthError::InvalidUsername(
            "username cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AuthError::InvalidUsername(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrate};

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    #[test]
    fn test_hash_is_argon2id_and_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong horse", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("longenough").is_ok());
    }

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("  admin ").unwrap(), "admin");
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH + 1)).is_err());
    }

    #[tokio::test]
    async fn test_create_then_login() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        let created = auth.create_admin("admin", "s3cure-pass").await.unwrap();
        let logged_in = auth.login("admin", "s3cure-pass").await.unwrap();
        assert_eq!(created.id, logged_in.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);
        auth.create_admin("admin", "s3cure-pass").await.unwrap();

        assert!(matches!(
            auth.login("admin", "wrong-pass").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody", "s3cure-pass").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_create_duplicate_admin() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);
        auth.create_admin("admin", "s3cure-pass").await.unwrap();

        assert!(matches!(
            auth.create_admin(" admin ", "other-pass").await,
            Err(AuthError::UserAlreadyExists)
        ));
    }
}
