//! Contact inquiry models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new contact inquiry (public form submission).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}
