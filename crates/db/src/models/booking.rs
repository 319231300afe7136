//! Booking models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub service_id: DbId,
    pub booking_date: NaiveDate,
    /// 24-hour `HH:MM` start time on the availability grid.
    pub booking_time: String,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking joined with its service's name and duration, for admin lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingWithService {
    pub id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub service_id: DbId,
    pub service_name: String,
    pub duration_mins: i32,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking (public form submission).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub service_id: DbId,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub notes: Option<String>,
}

/// DTO for an admin edit of a booking. All fields are optional; status
/// changes go through the dedicated status endpoint instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_id: Option<DbId>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub notes: Option<String>,
}
