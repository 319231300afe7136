//! Gallery item models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A row from the `gallery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gallery item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryItem {
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing gallery item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGalleryItem {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub nail_shape: Option<String>,
    pub nail_style: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
