//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers
//! 4. Session layer (tower-sessions with `SQLite` store, signed cookie)
//! 5. Rate limiting on `POST /admin/login` only (governor)

pub mod auth;
pub mod flash;
pub mod rate_limit;
pub mod security_headers;
pub mod session;

pub use auth::{
    AdminAuthRejection, OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin,
};
pub use flash::{Flashes, push_flash, take_flashes};
pub use rate_limit::login_rate_limiter;
pub use security_headers::security_headers_middleware;
pub use session::{create_session_layer, create_session_store};
