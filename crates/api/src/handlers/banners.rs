//! Handlers for promotional banners.
//!
//! The public list returns only banners that are live right now (active and
//! inside their window); the admin endpoints see everything.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use velour_core::error::CoreError;
use velour_core::gallery;
use velour_core::site;
use velour_core::types::DbId;
use velour_db::models::banner::{CreateBanner, UpdateBanner};
use velour_db::repositories::BannerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for banner listings.
#[derive(Debug, Deserialize)]
pub struct BannerListParams {
    pub placement: Option<String>,
}

fn validate_create(input: &CreateBanner) -> AppResult<()> {
    gallery::validate_title(&input.title)?;
    site::validate_placement(&input.placement)?;
    site::validate_window(input.starts_at, input.ends_at)?;
    if let Some(ref url) = input.image_url {
        gallery::validate_image_url(url)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /banners
// ---------------------------------------------------------------------------

/// List banners currently live on the public site, with an optional
/// placement filter.
pub async fn list_banners(
    State(state): State<AppState>,
    Query(params): Query<BannerListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref placement) = params.placement {
        site::validate_placement(placement)?;
    }
    let now = chrono::Utc::now();
    let items: Vec<_> = BannerRepo::list(&state.pool, params.placement.as_deref(), false)
        .await?
        .into_iter()
        .filter(|b| site::is_live(b.is_active, b.starts_at, b.ends_at, now))
        .collect();
    tracing::debug!(count = items.len(), "Listed live banners");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /admin/banners
// ---------------------------------------------------------------------------

/// List all banners, including inactive and out-of-window ones.
pub async fn admin_list_banners(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<BannerListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref placement) = params.placement {
        site::validate_placement(placement)?;
    }
    let items = BannerRepo::list(&state.pool, params.placement.as_deref(), true).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /admin/banners
// ---------------------------------------------------------------------------

/// Create a new banner.
pub async fn create_banner(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBanner>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let created = BannerRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, placement = %created.placement, "Banner created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /admin/banners/{id}
// ---------------------------------------------------------------------------

/// Update an existing banner.
pub async fn update_banner(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBanner>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        gallery::validate_title(title)?;
    }
    if let Some(ref placement) = input.placement {
        site::validate_placement(placement)?;
    }
    if let Some(ref url) = input.image_url {
        gallery::validate_image_url(url)?;
    }

    let current = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;
    // Check the window as it will be after the partial update.
    site::validate_window(
        input.starts_at.or(current.starts_at),
        input.ends_at.or(current.ends_at),
    )?;

    let updated = BannerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;
    tracing::info!(id = updated.id, "Banner updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/banners/{id}
// ---------------------------------------------------------------------------

/// Delete a banner by ID.
pub async fn delete_banner(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BannerRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Banner deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))
    }
}
