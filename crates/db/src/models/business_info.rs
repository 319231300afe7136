//! Business info singleton model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// The single row (id = 1) from the `business_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessInfo {
    pub id: DbId,
    pub salon_name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    /// Per-weekday opening hours: `{"mon": {"open", "close"} | null, ...}`.
    pub opening_hours: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the singleton upsert (`PUT /admin/business-info`).
///
/// The full document is replaced on every save; there is no partial-update
/// DTO because the admin form always submits the complete record.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveBusinessInfo {
    pub salon_name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub opening_hours: serde_json::Value,
}
