//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /donate                 - Donation form
//! POST /donate                 - Register a donor
//! GET  /donors                 - Public donor list (newest first)
//!
//! # Admin
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action (rate limited)
//! GET  /admin/dashboard        - Donor list and aggregates (requires auth)
//! POST /admin/delete/{id}      - Delete a donor (requires auth)
//! GET  /admin/logout           - Logout action
//!
//! # Health
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (database reachable)
//! ```

pub mod admin;
pub mod donate;
pub mod donors;
pub mod health;
pub mod home;

use axum::{
    Router,
    handler::Handler,
    routing::{get, post},
};

use crate::middleware::login_rate_limiter;
use crate::state::AppState;

/// Create the public site routes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/donate", get(donate::donate_page).post(donate::donate))
        .route("/donors", get(donors::donors_list))
}

/// Create the admin routes router (nested under `/admin`).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(admin::login_page).post(admin::login.layer(login_rate_limiter())),
        )
        .route("/dashboard", get(admin::dashboard))
        .route("/delete/{id}", post(admin::delete_donor))
        .route("/logout", get(admin::logout))
}

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin_routes())
        .merge(health_routes())
}
