//! Handlers for bookings and the availability grid.
//!
//! The public site submits bookings and queries availability; staff work
//! the queue (list, confirm, complete, cancel) from the admin dashboard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use velour_core::booking::{self, Slot, DEFAULT_DURATION_MINS};
use velour_core::contact as contact_rules;
use velour_core::error::CoreError;
use velour_core::site;
use velour_core::types::DbId;
use velour_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use velour_db::repositories::{BookingRepo, BusinessInfoRepo, OptionKind, OptionRepo, ServiceRepo};
use velour_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters and payloads
// ---------------------------------------------------------------------------

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: NaiveDate,
    pub service_id: Option<DbId>,
}

/// Availability grid for one day.
#[derive(Debug, Serialize)]
pub struct Availability {
    pub date: NaiveDate,
    /// Opening time `HH:MM`, or `null` when the salon is closed that day.
    pub open: Option<String>,
    pub close: Option<String>,
    pub slots: Vec<Slot>,
}

/// Query parameters for the admin booking list. Pagination comes in
/// through a separate [`PaginationParams`] extractor.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Payload for the status-change endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a booking exists, returning the full row.
async fn ensure_booking_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Booking> {
    BookingRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        })
    })
}

/// Validate that a nail shape/style refers to an active option.
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

async fn validate_create(pool: &sqlx::PgPool, input: &CreateBooking) -> AppResult<()> {
    booking::validate_customer_name(&input.customer_name)?;
    contact_rules::validate_email(&input.customer_email)?;
    if let Some(ref phone) = input.customer_phone {
        contact_rules::validate_phone(phone)?;
    }
    booking::validate_slot_alignment(&input.booking_time)?;
    booking::validate_date(input.booking_date, chrono::Utc::now().date_naive())?;
    if let Some(ref notes) = input.notes {
        booking::validate_notes(notes)?;
    }
    if let Some(ref shape) = input.nail_shape {
        ensure_option_exists(pool, OptionKind::Shape, shape).await?;
    }
    if let Some(ref style) = input.nail_style {
        ensure_option_exists(pool, OptionKind::Style, style).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /bookings/availability
// ---------------------------------------------------------------------------

/// Compute the time-slot grid for a given date.
///
/// Slots come from the business-info opening hours for that weekday;
/// passing `service_id` trims late slots that the service's duration no
/// longer fits into. Taken slots are flagged, not hidden.
pub async fn availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<impl IntoResponse> {
    let duration_mins = match params.service_id {
        Some(service_id) => {
            let service = ServiceRepo::find_by_id(&state.pool, service_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Service",
                    id: service_id,
                }))?;
            u32::try_from(service.duration_mins).unwrap_or(DEFAULT_DURATION_MINS)
        }
        None => DEFAULT_DURATION_MINS,
    };

    let info = BusinessInfoRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::InternalError("business_info seed row missing".into()))?;

    let day_key = site::weekday_key(params.date.weekday());
    let availability = match site::hours_for_day(&info.opening_hours, day_key) {
        None => Availability {
            date: params.date,
            open: None,
            close: None,
            slots: Vec::new(),
        },
        Some(hours) => {
            let booked = BookingRepo::booked_times(&state.pool, params.date).await?;
            let slots = booking::generate_slots(&hours.open, &hours.close, duration_mins, &booked)?;
            Availability {
                date: params.date,
                open: Some(hours.open),
                close: Some(hours.close),
                slots,
            }
        }
    };

    tracing::debug!(
        date = %params.date,
        slots = availability.slots.len(),
        "Computed availability"
    );
    Ok(Json(DataResponse { data: availability }))
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Submit a new booking from the public site. Starts in status `pending`.
///
/// A taken slot is not rejected here; double-booked slots are surfaced by
/// the availability grid and resolved by staff.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    // The service must exist before anything else is checked.
    ServiceRepo::find_by_id(&state.pool, input.service_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: input.service_id,
        }))?;
    validate_create(&state.pool, &input).await?;

    let created = BookingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        date = %created.booking_date,
        time = %created.booking_time,
        "Booking created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings
// ---------------------------------------------------------------------------

/// List bookings for the admin dashboard, with status/date filters.
pub async fn list_bookings(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        booking::validate_status(status)?;
    }
    let limit = clamp_limit(page.limit);
    let offset = clamp_offset(page.offset);

    let items = BookingRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.date,
        limit,
        offset,
    )
    .await?;
    tracing::debug!(count = items.len(), "Listed bookings");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings/{id}
// ---------------------------------------------------------------------------

/// Get a single booking, joined with its service, by ID.
pub async fn get_booking(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let b = BookingRepo::find_with_service(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(DataResponse { data: b }))
}

// ---------------------------------------------------------------------------
// PUT /admin/bookings/{id}
// ---------------------------------------------------------------------------

/// Edit a booking's details (not its status).
pub async fn update_booking(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<impl IntoResponse> {
    ensure_booking_exists(&state.pool, id).await?;

    if let Some(ref name) = input.customer_name {
        booking::validate_customer_name(name)?;
    }
    if let Some(ref email) = input.customer_email {
        contact_rules::validate_email(email)?;
    }
    if let Some(ref phone) = input.customer_phone {
        contact_rules::validate_phone(phone)?;
    }
    if let Some(ref time) = input.booking_time {
        booking::validate_slot_alignment(time)?;
    }
    if let Some(ref notes) = input.notes {
        booking::validate_notes(notes)?;
    }
    if let Some(service_id) = input.service_id {
        ServiceRepo::find_by_id(&state.pool, service_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Service",
                id: service_id,
            }))?;
    }
    if let Some(ref shape) = input.nail_shape {
        ensure_option_exists(&state.pool, OptionKind::Shape, shape).await?;
    }
    if let Some(ref style) = input.nail_style {
        ensure_option_exists(&state.pool, OptionKind::Style, style).await?;
    }

    let updated = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    tracing::info!(id = updated.id, "Booking updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/bookings/{id}/status
// ---------------------------------------------------------------------------

/// Move a booking through its status state machine.
pub async fn change_booking_status(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusChange>,
) -> AppResult<impl IntoResponse> {
    let current = ensure_booking_exists(&state.pool, id).await?;
    booking::validate_transition(&current.status, &input.status)?;

    let updated = BookingRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    tracing::info!(
        id,
        from = %current.status,
        to = %updated.status,
        user_id = user.user_id,
        "Booking status changed"
    );
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/bookings/{id}
// ---------------------------------------------------------------------------

/// Delete a booking by ID.
pub async fn delete_booking(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BookingRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Booking deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
    }
}
