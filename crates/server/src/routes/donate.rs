//! Donation form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use blood_donation_core::BloodType;

use crate::error::AppError;
use crate::filters;
use crate::messages;
use crate::middleware::{Flashes, OptionalAdmin, push_flash, take_flashes};
use crate::models::Flash;
use crate::services::DonorService;
use crate::state::AppState;

/// Donation form data.
///
/// Missing fields deserialize as empty strings and fail validation like any
/// other bad input.
#[derive(Debug, Default, Deserialize)]
pub struct DonateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub blood_type: String,
}

/// Donation form template.
///
/// On a failed submission the raw values are echoed back so the visitor can
/// correct them.
#[derive(Template, WebTemplate)]
#[template(path = "donate.html")]
pub struct DonateTemplate {
    pub flashes: Vec<Flash>,
    pub is_admin: bool,
    pub blood_types: [BloodType; 8],
    pub name: String,
    pub phone: String,
    pub blood_type: String,
}

impl DonateTemplate {
    fn new(flashes: Vec<Flash>, is_admin: bool, form: DonateForm) -> Self {
        Self {
            flashes,
            is_admin,
            blood_types: BloodType::ALL,
            name: form.name,
            phone: form.phone,
            blood_type: form.blood_type,
        }
    }
}

/// Display the donation form.
pub async fn donate_page(
    OptionalAdmin(admin): OptionalAdmin,
    Flashes(flashes): Flashes,
) -> impl IntoResponse {
    DonateTemplate::new(flashes, admin.is_some(), DonateForm::default())
}

/// Handle a donation submission.
///
/// Success redirects back to the empty form with a thank-you notice. Any
/// validation or duplicate failure re-renders the form with the submitted
/// values and the matching notice.
#[tracing::instrument(skip_all)]
pub async fn donate(
    State(state): State<AppState>,
    session: Session,
    OptionalAdmin(admin): OptionalAdmin,
    Form(form): Form<DonateForm>,
) -> Result<Response, AppError> {
    let service = DonorService::new(state.pool());

    match service
        .register(&form.name, &form.phone, &form.blood_type)
        .await
    {
        Ok(_) => {
            push_flash(&session, Flash::success(messages::DONATION_RECORDED)).await;
            Ok(Redirect::to("/donate").into_response())
        }
        Err(err) => {
            let Some(message) = err.user_message() else {
                return Err(err.into());
            };
            tracing::debug!(error = %err, "Donation rejected");

            // Notices queued earlier (e.g. by another tab) are shown too.
            let mut flashes = take_flashes(&session).await;
            flashes.push(Flash::error(message));

            Ok(DonateTemplate::new(flashes, admin.is_some(), form).into_response())
        }
    }
}
