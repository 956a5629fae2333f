//! Integration tests for the blood donation registry.
//!
//! Each test spawns the full router on an ephemeral port backed by its own
//! in-memory `SQLite` database, then drives it over HTTP with a cookie-keeping
//! `reqwest` client. Nothing outside the process is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p blood-donation-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::net::SocketAddr;

use reqwest::{Client, Response, redirect::Policy};
use secrecy::SecretString;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use blood_donation_server::app::build_router;
use blood_donation_server::config::AppConfig;
use blood_donation_server::db;
use blood_donation_server::services::AuthService;
use blood_donation_server::state::AppState;

/// Admin account created by [`TestApp::with_admin`].
pub const ADMIN_USERNAME: &str = "admin";
/// Password of [`ADMIN_USERNAME`].
pub const ADMIN_PASSWORD: &str = "hunter2-but-longer";

/// 64+ bytes, only used to sign cookies in tests.
const TEST_SESSION_SECRET: &str =
    "kR8v2Qm9Lx4Tz7Wc1Np6Hs3Jd5Gf0Ab8Ye2Ui4Oo7Pl1Mk9Nj3Bh6Vg5Cf8Xd2Sa0Zq4Wr7Ty1Ue";

/// A running server plus a client that keeps cookies and does not follow redirects.
pub struct TestApp {
    pub base_url: String,
    pub pool: SqlitePool,
    pub client: Client,
    server: JoinHandle<()>,
}

impl TestApp {
    /// Spawn a server with a migrated, empty database.
    pub async fn spawn() -> Self {
        let pool = db::create_memory_pool().await.unwrap();
        db::migrate(&pool).await.unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let config = AppConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: addr.ip(),
            port: addr.port(),
            base_url: base_url.clone(),
            session_secret: SecretString::from(TEST_SESSION_SECRET),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
        };

        let app = build_router(AppState::new(config, pool.clone()));
        let server = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });

        Self {
            base_url,
            pool,
            client: new_client(),
            server,
        }
    }

    /// Spawn a server that already has the [`ADMIN_USERNAME`] account.
    pub async fn with_admin() -> Self {
        let app = Self::spawn().await;
        AuthService::new(&app.pool)
            .create_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .unwrap();
        app
    }

    /// Absolute URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A second visitor with an empty cookie jar.
    #[must_use]
    pub fn new_visitor(&self) -> Client {
        new_client()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .unwrap()
    }

    /// Submit the donation form.
    pub async fn donate(&self, name: &str, phone: &str, blood_type: &str) -> Response {
        self.post_form(
            "/donate",
            &[("name", name), ("phone", phone), ("blood_type", blood_type)],
        )
        .await
    }

    /// Submit the login form.
    pub async fn login(&self, username: &str, password: &str) -> Response {
        self.post_form(
            "/admin/login",
            &[("username", username), ("password", password)],
        )
        .await
    }

    /// Log in as [`ADMIN_USERNAME`] and assert it worked.
    pub async fn login_as_admin(&self) {
        let resp = self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;
        assert_eq!(location(&resp), "/admin/dashboard");
    }

    /// Number of stored donors, read straight from the database.
    pub async fn donor_count(&self) -> i64 {
        db::DonorRepository::new(&self.pool).count().await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// The `Location` header of a redirect response.
#[must_use]
pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
