//! Handlers for contact inquiries.
//!
//! The public site submits inquiries; staff triage the inbox through the
//! `new -> read -> replied -> archived` state machine.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use velour_core::contact;
use velour_core::error::CoreError;
use velour_core::types::DbId;
use velour_db::models::contact::{Contact, CreateContact};
use velour_db::repositories::ContactRepo;
use velour_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the admin inquiry list. Pagination comes in
/// through a separate [`PaginationParams`] extractor.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
}

/// Payload for the status-change endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

async fn ensure_contact_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Contact> {
    ContactRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        })
    })
}

fn validate_create(input: &CreateContact) -> AppResult<()> {
    contact::validate_name(&input.name)?;
    contact::validate_email(&input.email)?;
    if let Some(ref phone) = input.phone {
        contact::validate_phone(phone)?;
    }
    if let Some(ref subject) = input.subject {
        contact::validate_subject(subject)?;
    }
    contact::validate_message(&input.message)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /contacts
// ---------------------------------------------------------------------------

/// Submit a new inquiry from the public contact form. Starts in status
/// `new`.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let created = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, "Contact inquiry created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /admin/contacts
// ---------------------------------------------------------------------------

/// List inquiries for the admin inbox, newest first, with a status filter.
pub async fn list_contacts(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        contact::validate_status(status)?;
    }
    let limit = clamp_limit(page.limit);
    let offset = clamp_offset(page.offset);

    let items = ContactRepo::list(&state.pool, params.status.as_deref(), limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed contact inquiries");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /admin/contacts/{id}
// ---------------------------------------------------------------------------

/// Get a single inquiry by ID.
pub async fn get_contact(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let c = ensure_contact_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: c }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/contacts/{id}/status
// ---------------------------------------------------------------------------

/// Move an inquiry forward through its status state machine.
pub async fn change_contact_status(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusChange>,
) -> AppResult<impl IntoResponse> {
    let current = ensure_contact_exists(&state.pool, id).await?;
    contact::validate_transition(&current.status, &input.status)?;

    let updated = ContactRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    tracing::info!(
        id,
        from = %current.status,
        to = %updated.status,
        user_id = user.user_id,
        "Contact status changed"
    );
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/contacts/{id}
// ---------------------------------------------------------------------------

/// Delete an inquiry by ID.
pub async fn delete_contact(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Contact inquiry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}
