//! Handlers for the site singletons: business info and hero settings.
//!
//! Both tables hold exactly one row seeded by migration, so public reads
//! never 404 and admin saves are full-document upserts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use velour_core::contact;
use velour_core::error::CoreError;
use velour_core::gallery;
use velour_core::site;
use velour_db::models::business_info::SaveBusinessInfo;
use velour_db::models::hero_settings::SaveHeroSettings;
use velour_db::repositories::{BusinessInfoRepo, HeroSettingsRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /business-info
// ---------------------------------------------------------------------------

/// Get the salon's business info (name, contact details, opening hours).
pub async fn get_business_info(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let info = BusinessInfoRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::InternalError("business_info seed row missing".into()))?;
    Ok(Json(DataResponse { data: info }))
}

// ---------------------------------------------------------------------------
// PUT /admin/business-info
// ---------------------------------------------------------------------------

/// Replace the business info document.
pub async fn save_business_info(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveBusinessInfo>,
) -> AppResult<impl IntoResponse> {
    if input.salon_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Salon name cannot be empty".into(),
        )));
    }
    if let Some(ref email) = input.email {
        contact::validate_email(email)?;
    }
    if let Some(ref phone) = input.phone {
        contact::validate_phone(phone)?;
    }
    site::validate_opening_hours(&input.opening_hours)?;

    let saved = BusinessInfoRepo::save(&state.pool, &input).await?;
    tracing::info!(salon_name = %saved.salon_name, "Business info saved");
    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// GET /hero-settings
// ---------------------------------------------------------------------------

/// Get the homepage hero settings.
pub async fn get_hero_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = HeroSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::InternalError("hero_settings seed row missing".into()))?;
    Ok(Json(DataResponse { data: settings }))
}

// ---------------------------------------------------------------------------
// PUT /admin/hero-settings
// ---------------------------------------------------------------------------

/// Replace the hero settings document.
pub async fn save_hero_settings(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveHeroSettings>,
) -> AppResult<impl IntoResponse> {
    site::validate_headline(&input.headline)?;
    site::validate_overlay_opacity(input.overlay_opacity)?;
    if let Some(ref url) = input.background_image_url {
        gallery::validate_image_url(url)?;
    }

    let saved = HeroSettingsRepo::save(&state.pool, &input).await?;
    tracing::info!("Hero settings saved");
    Ok(Json(DataResponse { data: saved }))
}
