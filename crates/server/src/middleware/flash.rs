//! One-shot flash notices stored in the session.
//!
//! A handler pushes a notice before redirecting; the next page that renders
//! drains the queue through the [`Flashes`] extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue a flash notice for the next rendered page.
///
/// Failing to store a notice is logged and otherwise ignored; it never fails
/// the request.
pub async fn push_flash(session: &Session, flash: Flash) {
    let mut flashes: Vec<Flash> = match session.get(session_keys::FLASHES).await {
        Ok(existing) => existing.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read flash notices");
            Vec::new()
        }
    };
    flashes.push(flash);

    if let Err(e) = session.insert(session_keys::FLASHES, flashes).await {
        tracing::warn!(error = %e, "Failed to store flash notice");
    }
}

/// Remove and return all queued flash notices.
pub async fn take_flashes(session: &Session) -> Vec<Flash> {
    match session.remove::<Vec<Flash>>(session_keys::FLASHES).await {
        Ok(flashes) => flashes.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read flash notices");
            Vec::new()
        }
    }
}

/// Extractor that drains pending flash notices.
///
/// # Example
///
/// ```rust,ignore
/// async fn page(Flashes(flashes): Flashes) -> impl IntoResponse {
///     PageTemplate { flashes }
/// }
/// ```
pub struct Flashes(pub Vec<Flash>);

impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flashes = match parts.extensions.get::<Session>() {
            Some(session) => take_flashes(session).await,
            None => Vec::new(),
        };

        Ok(Self(flashes))
    }
}
