//! Handlers for booking-form options (nail shapes and styles).
//!
//! The two option tables share one handler set; the route table binds each
//! path to the matching [`OptionKind`]. Deletes are soft so historical
//! bookings keep valid labels.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use velour_core::error::CoreError;
use velour_core::gallery;
use velour_core::types::DbId;
use velour_db::models::option_item::CreateOptionItem;
use velour_db::repositories::{OptionKind, OptionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

async fn list_options(state: &AppState, kind: OptionKind) -> AppResult<impl IntoResponse> {
    let items = OptionRepo::list(&state.pool, kind, false).await?;
    Ok(Json(DataResponse { data: items }))
}

async fn admin_list_options(state: &AppState, kind: OptionKind) -> AppResult<impl IntoResponse> {
    let items = OptionRepo::list(&state.pool, kind, true).await?;
    Ok(Json(DataResponse { data: items }))
}

async fn create_option(
    state: &AppState,
    kind: OptionKind,
    input: CreateOptionItem,
) -> AppResult<impl IntoResponse> {
    gallery::validate_option_name(&input.name)?;
    if input.label.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label cannot be empty".into(),
        )));
    }

    let created = OptionRepo::create(&state.pool, kind, &input).await?;
    tracing::info!(id = created.id, name = %created.name, kind = kind.entity(), "Option created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

async fn deactivate_option(state: &AppState, kind: OptionKind, id: DbId) -> AppResult<StatusCode> {
    let deactivated = OptionRepo::deactivate(&state.pool, kind, id).await?;
    if deactivated {
        tracing::info!(id, kind = kind.entity(), "Option deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Nail shapes
// ---------------------------------------------------------------------------

/// GET /options/nail-shapes - active shapes for the booking form.
pub async fn list_nail_shapes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    list_options(&state, OptionKind::Shape).await
}

/// GET /admin/options/nail-shapes - all shapes, including deactivated.
pub async fn admin_list_nail_shapes(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    admin_list_options(&state, OptionKind::Shape).await
}

/// POST /admin/options/nail-shapes - add a shape.
pub async fn create_nail_shape(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOptionItem>,
) -> AppResult<impl IntoResponse> {
    create_option(&state, OptionKind::Shape, input).await
}

/// DELETE /admin/options/nail-shapes/{id} - deactivate a shape.
pub async fn delete_nail_shape(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    deactivate_option(&state, OptionKind::Shape, id).await
}

// ---------------------------------------------------------------------------
// Nail styles
// ---------------------------------------------------------------------------

/// GET /options/nail-styles - active styles for the booking form.
pub async fn list_nail_styles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    list_options(&state, OptionKind::Style).await
}

/// GET /admin/options/nail-styles - all styles, including deactivated.
pub async fn admin_list_nail_styles(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    admin_list_options(&state, OptionKind::Style).await
}

/// POST /admin/options/nail-styles - add a style.
pub async fn create_nail_style(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOptionItem>,
) -> AppResult<impl IntoResponse> {
    create_option(&state, OptionKind::Style, input).await
}

/// DELETE /admin/options/nail-styles/{id} - deactivate a style.
pub async fn delete_nail_style(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    deactivate_option(&state, OptionKind::Style, id).await
}
