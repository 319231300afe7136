//! Nail shape/style option models and DTOs.
//!
//! Both option tables (`nail_shapes`, `nail_styles`) share this row shape;
//! the repository picks the table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `nail_shapes` or `nail_styles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OptionItem {
    pub id: DbId,
    /// Stable machine name (lowercase snake_case), referenced by bookings
    /// and gallery items.
    pub name: String,
    /// Human-readable label shown in the booking form.
    pub label: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new option.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOptionItem {
    pub name: String,
    pub label: String,
    pub sort_order: Option<i32>,
}
