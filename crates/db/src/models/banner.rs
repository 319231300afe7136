//! Banner models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Banner {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub placement: String,
    pub sort_order: i32,
    pub is_active: bool,
    /// Optional activity window; an unset end is open-ended.
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new banner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBanner {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub placement: String,
    pub sort_order: Option<i32>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// DTO for updating an existing banner. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBanner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub placement: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}
