//! Handlers for the service catalog.
//!
//! Public visitors browse active services; admins manage the full catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use velour_core::catalog;
use velour_core::error::CoreError;
use velour_core::gallery;
use velour_core::types::DbId;
use velour_db::models::service::{CreateService, Service, UpdateService};
use velour_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a service exists, returning the full row.
async fn ensure_service_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Service> {
    ServiceRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        })
    })
}

fn validate_create(input: &CreateService) -> AppResult<()> {
    catalog::validate_name(&input.name)?;
    catalog::validate_category(&input.category)?;
    catalog::validate_price_cents(input.price_cents)?;
    catalog::validate_duration_mins(input.duration_mins)?;
    if let Some(ref description) = input.description {
        catalog::validate_description(description)?;
    }
    if let Some(ref url) = input.image_url {
        gallery::validate_image_url(url)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /services
// ---------------------------------------------------------------------------

/// List active services for the public site.
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ServiceRepo::list(&state.pool, false).await?;
    tracing::debug!(count = items.len(), "Listed services");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /services/{id}
// ---------------------------------------------------------------------------

/// Get a single active service by ID.
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let s = ensure_service_exists(&state.pool, id).await?;
    if !s.is_active {
        // Retired services disappear from the public site.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }
    Ok(Json(DataResponse { data: s }))
}

// ---------------------------------------------------------------------------
// GET /admin/services
// ---------------------------------------------------------------------------

/// List all services, including inactive ones, for the admin dashboard.
pub async fn admin_list_services(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = ServiceRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /admin/services
// ---------------------------------------------------------------------------

/// Create a new service.
pub async fn create_service(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let created = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Service created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /admin/services/{id}
// ---------------------------------------------------------------------------

/// Update an existing service.
pub async fn update_service(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        catalog::validate_name(name)?;
    }
    if let Some(ref category) = input.category {
        catalog::validate_category(category)?;
    }
    if let Some(price_cents) = input.price_cents {
        catalog::validate_price_cents(price_cents)?;
    }
    if let Some(duration_mins) = input.duration_mins {
        catalog::validate_duration_mins(duration_mins)?;
    }
    if let Some(ref description) = input.description {
        catalog::validate_description(description)?;
    }
    if let Some(ref url) = input.image_url {
        gallery::validate_image_url(url)?;
    }

    let updated = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    tracing::info!(id = updated.id, "Service updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/services/{id}
// ---------------------------------------------------------------------------

/// Delete a service by ID.
///
/// Fails with 409 when bookings still reference the service; deactivate
/// instead to retire it from the public site.
pub async fn delete_service(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Service deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))
    }
}
