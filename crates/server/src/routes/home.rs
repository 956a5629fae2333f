//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::{Flashes, OptionalAdmin};
use crate::models::Flash;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub flashes: Vec<Flash>,
    pub is_admin: bool,
}

/// Display the landing page.
pub async fn home(OptionalAdmin(admin): OptionalAdmin, Flashes(flashes): Flashes) -> impl IntoResponse {
    HomeTemplate {
        flashes,
        is_admin: admin.is_some(),
    }
}
