//! Session middleware configuration.
//!
//! Sets up `SQLite`-backed sessions using tower-sessions with a signed cookie,
//! SameSite=Strict and a 24 hour inactivity expiry.

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "blood_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the `SQLite` session store.
///
/// The `tower_sessions` table is created by `db::migrate`, not here.
#[must_use]
pub fn create_session_store(pool: &SqlitePool) -> SqliteStore {
    SqliteStore::new(pool.clone())
}

/// Create the session layer with `SQLite` store.
///
/// # Arguments
///
/// * `pool` - `SQLite` connection pool
/// * `config` - Server configuration (signing secret, HTTPS mode)
///
/// # Panics
///
/// Panics if the session secret is shorter than 64 bytes. `AppConfig::from_env`
/// rejects such secrets before this is reached.
#[must_use]
pub fn create_session_layer(
    pool: &SqlitePool,
    config: &AppConfig,
) -> SessionManagerLayer<SqliteStore, SignedCookie> {
    let key = Key::from(config.session_secret.expose_secret().as_bytes());

    SessionManagerLayer::new(create_session_store(pool))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}
