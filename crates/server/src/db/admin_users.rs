//! Admin user repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use blood_donation_core::AdminUserId;

use super::RepositoryError;
use crate::models::AdminUser;

/// Internal row type for `SQLite` admin user queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: i64,
    username: String,
    created_at: DateTime<Utc>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(row: AdminUserRow) -> Self {
        Self {
            id: AdminUserId::new(row.id),
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// Row type for login lookups, which also need the password hash.
#[derive(Debug, sqlx::FromRow)]
struct AdminUserWithHashRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Repository for admin user database operations.
pub struct AdminUserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an admin user and their password hash by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserWithHashRow>(
            r"
            SELECT id, username, password_hash, created_at
            FROM admin_user
            WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| {
            let user = AdminUser {
                id: AdminUserId::new(row.id),
                username: row.username,
                created_at: row.created_at,
            };
            (user, row.password_hash)
        }))
    }

    /// Create a new admin user with an already hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r"
            INSERT INTO admin_user (username, password_hash, created_at)
            VALUES (?, ?, ?)
            RETURNING id, username, created_at
            ",
        )
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }
}
