//! Admin route handlers: login, dashboard, donor removal and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use blood_donation_core::DonorId;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::messages;
use crate::middleware::auth::LOGIN_PATH;
use crate::middleware::{
    Flashes, OptionalAdmin, RequireAdmin, clear_current_admin, push_flash, set_current_admin,
};
use crate::models::{CurrentAdmin, DashboardSummary, Donor, Flash};
use crate::services::{AuthError, AuthService, DonorService};
use crate::state::AppState;

const DASHBOARD_PATH: &str = "/admin/dashboard";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub flashes: Vec<Flash>,
    pub is_admin: bool,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub flashes: Vec<Flash>,
    pub is_admin: bool,
    pub admin: CurrentAdmin,
    pub donors: Vec<Donor>,
    pub summary: DashboardSummary,
}

// =============================================================================
// Login / Logout
// =============================================================================

/// Display the login page, or go straight to the dashboard when already signed in.
pub async fn login_page(
    OptionalAdmin(admin): OptionalAdmin,
    Flashes(flashes): Flashes,
) -> Response {
    if admin.is_some() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }

    LoginTemplate {
        flashes,
        is_admin: false,
    }
    .into_response()
}

/// Handle login form submission.
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.username, &form.password).await {
        Ok(user) => {
            let admin = CurrentAdmin::from(&user);
            set_current_admin(&session, &admin).await?;
            set_sentry_user(&admin.id, &admin.username);
            push_flash(&session, Flash::success(messages::LOGIN_SUCCESS)).await;

            tracing::info!(admin_id = %admin.id, "Admin logged in");
            Ok(Redirect::to(DASHBOARD_PATH))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "Failed admin login attempt");
            push_flash(&session, Flash::error(messages::INVALID_CREDENTIALS)).await;
            Ok(Redirect::to(LOGIN_PATH))
        }
        Err(e) => Err(e.into()),
    }
}

/// Log out and return to the landing page.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session).await?;
    clear_sentry_user();
    push_flash(&session, Flash::success(messages::LOGGED_OUT)).await;
    Ok(Redirect::to("/"))
}

// =============================================================================
// Dashboard
// =============================================================================

/// Display every donor with the registry aggregates.
#[tracing::instrument(skip_all, fields(admin = %admin.username))]
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Flashes(flashes): Flashes,
) -> Result<impl IntoResponse, AppError> {
    let (donors, summary) = DonorService::new(state.pool()).dashboard().await?;

    Ok(DashboardTemplate {
        flashes,
        is_admin: true,
        admin,
        donors,
        summary,
    })
}

/// Delete a donor and return to the dashboard.
///
/// Unknown IDs respond with 404 and the localized "not found" text.
#[tracing::instrument(skip_all, fields(admin = %admin.username, donor_id = id))]
pub async fn delete_donor(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    DonorService::new(state.pool())
        .delete(DonorId::new(id))
        .await?;

    push_flash(&session, Flash::success(messages::DONOR_DELETED)).await;
    Ok(Redirect::to(DASHBOARD_PATH))
}
