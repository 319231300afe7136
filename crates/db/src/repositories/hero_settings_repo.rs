//! Repository for the `hero_settings` singleton table.
//!
//! Same singleton discipline as `business_info`: one seeded row with
//! id = 1, upserted in place.

use sqlx::PgPool;

use crate::models::hero_settings::{HeroSettings, SaveHeroSettings};

const COLUMNS: &str = "id, headline, subheadline, cta_label, cta_url, \
     background_image_url, overlay_opacity, created_at, updated_at";

/// Fixed primary key of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Provides read/upsert access to the hero settings singleton.
pub struct HeroSettingsRepo;

impl HeroSettingsRepo {
    /// Fetch the singleton row.
    pub async fn get(pool: &PgPool) -> Result<Option<HeroSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_settings WHERE id = $1");
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Replace the singleton row, creating it if the seed was removed.
    pub async fn save(
        pool: &PgPool,
        input: &SaveHeroSettings,
    ) -> Result<HeroSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_settings \
                (id, headline, subheadline, cta_label, cta_url, background_image_url, overlay_opacity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                headline = EXCLUDED.headline, \
                subheadline = EXCLUDED.subheadline, \
                cta_label = EXCLUDED.cta_label, \
                cta_url = EXCLUDED.cta_url, \
                background_image_url = EXCLUDED.background_image_url, \
                overlay_opacity = EXCLUDED.overlay_opacity \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSettings>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.headline)
            .bind(&input.subheadline)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(&input.background_image_url)
            .bind(input.overlay_opacity)
            .fetch_one(pool)
            .await
    }
}
