//! Authentication middleware and extractors for the admin area.
//!
//! Provides extractors for requiring admin authentication in route handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use super::flash::push_flash;
use crate::messages;
use crate::models::{CurrentAdmin, Flash, session_keys};

/// Where unauthenticated admin requests are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Extractor that requires admin authentication.
///
/// If the admin is not logged in, queues a "login required" flash and
/// redirects to the login page. The handler does not run.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

/// Error returned when admin authentication is required but the visitor is not logged in.
#[derive(Debug)]
pub enum AdminAuthRejection {
    /// Redirect to login page.
    RedirectToLogin,
    /// No session layer is installed for this route.
    MissingSession,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::MissingSession => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::MissingSession)?;

        let admin: Option<CurrentAdmin> = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten();

        match admin {
            Some(admin) => Ok(Self(admin)),
            None => {
                push_flash(session, Flash::error(messages::LOGIN_REQUIRED)).await;
                Err(AdminAuthRejection::RedirectToLogin)
            }
        }
    }
}

/// Extractor that optionally gets the current admin.
///
/// Unlike `RequireAdmin`, this does not reject the request if the admin is not logged in.
pub struct OptionalAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(admin))
    }
}

/// Store the admin in a fresh session (login).
///
/// The session ID is cycled first so a pre-login session ID cannot be reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Drop all session data and issue a new session ID (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.clear().await;
    session.cycle_id().await
}
