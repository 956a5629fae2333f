//! Public donor list route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::filters;
use crate::middleware::{Flashes, OptionalAdmin};
use crate::models::{Donor, Flash};
use crate::services::DonorService;
use crate::state::AppState;

/// Donor list template.
#[derive(Template, WebTemplate)]
#[template(path = "donors.html")]
pub struct DonorsTemplate {
    pub flashes: Vec<Flash>,
    pub is_admin: bool,
    pub donors: Vec<Donor>,
}

/// Display all donors, newest first.
#[tracing::instrument(skip_all)]
pub async fn donors_list(
    State(state): State<AppState>,
    OptionalAdmin(admin): OptionalAdmin,
    Flashes(flashes): Flashes,
) -> Result<impl IntoResponse, AppError> {
    let donors = DonorService::new(state.pool()).list_all().await?;

    Ok(DonorsTemplate {
        flashes,
        is_admin: admin.is_some(),
        donors,
    })
}
