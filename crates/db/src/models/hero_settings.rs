//! Hero settings singleton model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// The single row (id = 1) from the `hero_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSettings {
    pub id: DbId,
    pub headline: String,
    pub subheadline: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub background_image_url: Option<String>,
    pub overlay_opacity: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the singleton upsert (`PUT /admin/hero-settings`).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveHeroSettings {
    pub headline: String,
    pub subheadline: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub background_image_url: Option<String>,
    pub overlay_opacity: f64,
}
