//! Service catalog models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i32,
    pub duration_mins: i32,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_cents: i32,
    pub duration_mins: i32,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing service. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i32>,
    pub duration_mins: Option<i32>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
