//! Repository for the `bookings` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use velour_core::booking::{STATUS_CANCELLED, STATUS_PENDING};
use velour_core::types::DbId;

use crate::models::booking::{Booking, BookingWithService, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, customer_name, customer_email, customer_phone, service_id, \
     booking_date, booking_time, nail_shape, nail_style, notes, status, \
     created_at, updated_at";

const JOINED_COLUMNS: &str = "b.id, b.customer_name, b.customer_email, b.customer_phone, \
     b.service_id, s.name AS service_name, s.duration_mins, \
     b.booking_date, b.booking_time, b.nail_shape, b.nail_style, b.notes, b.status, \
     b.created_at, b.updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking with status `pending`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (customer_name, customer_email, customer_phone, service_id, \
                 booking_date, booking_time, nail_shape, nail_style, notes, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(input.service_id)
            .bind(input.booking_date)
            .bind(&input.booking_time)
            .bind(&input.nail_shape)
            .bind(&input.nail_style)
            .bind(&input.notes)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a booking joined with its service, for admin detail views.
    pub async fn find_with_service(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingWithService>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bookings b \
             JOIN services s ON s.id = b.service_id \
             WHERE b.id = $1"
        );
        sqlx::query_as::<_, BookingWithService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings for the admin dashboard, optionally filtered by status
    /// and/or date, newest day first then by start time.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        date: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BookingWithService>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bookings b \
             JOIN services s ON s.id = b.service_id \
             WHERE ($1::text IS NULL OR b.status = $1) \
               AND ($2::date IS NULL OR b.booking_date = $2) \
             ORDER BY b.booking_date DESC, b.booking_time ASC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, BookingWithService>(&query)
            .bind(status)
            .bind(date)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Start times (`HH:MM`) of non-cancelled bookings on a given date.
    ///
    /// Feeds the availability grid's `booked` flags.
    pub async fn booked_times(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT booking_time FROM bookings \
             WHERE booking_date = $1 AND status <> $2 \
             ORDER BY booking_time ASC",
        )
        .bind(date)
        .bind(STATUS_CANCELLED)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(t,)| t).collect())
    }

    /// Update a booking's editable fields. Only non-`None` fields are
    /// applied; status is changed via [`BookingRepo::update_status`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET \
                customer_name = COALESCE($2, customer_name), \
                customer_email = COALESCE($3, customer_email), \
                customer_phone = COALESCE($4, customer_phone), \
                service_id = COALESCE($5, service_id), \
                booking_date = COALESCE($6, booking_date), \
                booking_time = COALESCE($7, booking_time), \
                nail_shape = COALESCE($8, nail_shape), \
                nail_style = COALESCE($9, nail_style), \
                notes = COALESCE($10, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(input.service_id)
            .bind(input.booking_date)
            .bind(&input.booking_time)
            .bind(&input.nail_shape)
            .bind(&input.nail_style)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set a booking's status. The transition is validated by the caller.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a booking by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
