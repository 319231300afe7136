//! Handlers for the gallery.
//!
//! Public visitors browse active gallery items filtered by category or
//! featured flag; admins manage the full set.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use velour_core::error::CoreError;
use velour_core::gallery;
use velour_core::types::DbId;
use velour_db::models::gallery_item::{CreateGalleryItem, UpdateGalleryItem};
use velour_db::repositories::{GalleryRepo, OptionKind, OptionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for gallery listings.
#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Validate that a nail shape/style tag refers to an active option.
async fn ensure_option_exists(
    pool: &sqlx::PgPool,
    kind: OptionKind,
    name: &str,
) -> AppResult<()> {
    if OptionRepo::exists_active(pool, kind, name).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown {}: '{name}'",
            kind.entity()
        ))))
    }
}

async fn validate_create(pool: &sqlx::PgPool, input: &CreateGalleryItem) -> AppResult<()> {
    gallery::validate_title(&input.title)?;
    gallery::validate_image_url(&input.image_url)?;
    gallery::validate_category(&input.category)?;
    if let Some(ref shape) = input.nail_shape {
        ensure_option_exists(pool, OptionKind::Shape, shape).await?;
    }
    if let Some(ref style) = input.nail_style {
        ensure_option_exists(pool, OptionKind::Style, style).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /gallery
// ---------------------------------------------------------------------------

/// List active gallery items for the public site, with optional category
/// and featured filters.
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref category) = params.category {
        gallery::validate_category(category)?;
    }
    let items = GalleryRepo::list(
        &state.pool,
        params.category.as_deref(),
        params.featured,
        false,
    )
    .await?;
    tracing::debug!(count = items.len(), "Listed gallery items");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /admin/gallery
// ---------------------------------------------------------------------------

/// List all gallery items, including inactive ones, for the admin dashboard.
pub async fn admin_list_gallery(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref category) = params.category {
        gallery::validate_category(category)?;
    }
    let items = GalleryRepo::list(
        &state.pool,
        params.category.as_deref(),
        params.featured,
        true,
    )
    .await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /admin/gallery
// ---------------------------------------------------------------------------

/// Create a new gallery item.
pub async fn create_gallery_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    validate_create(&state.pool, &input).await?;

    let created = GalleryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, title = %created.title, "Gallery item created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /admin/gallery/{id}
// ---------------------------------------------------------------------------

/// Update an existing gallery item.
pub async fn update_gallery_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        gallery::validate_title(title)?;
    }
    if let Some(ref url) = input.image_url {
        gallery::validate_image_url(url)?;
    }
    if let Some(ref category) = input.category {
        gallery::validate_category(category)?;
    }
    if let Some(ref shape) = input.nail_shape {
        ensure_option_exists(&state.pool, OptionKind::Shape, shape).await?;
    }
    if let Some(ref style) = input.nail_style {
        ensure_option_exists(&state.pool, OptionKind::Style, style).await?;
    }

    let updated = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))?;
    tracing::info!(id = updated.id, "Gallery item updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/gallery/{id}
// ---------------------------------------------------------------------------

/// Delete a gallery item by ID.
pub async fn delete_gallery_item(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GalleryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Gallery item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }))
    }
}
