//! Repository for the `banners` table.

use sqlx::PgPool;
use velour_core::types::DbId;

use crate::models::banner::{Banner, CreateBanner, UpdateBanner};

const COLUMNS: &str = "id, title, subtitle, image_url, link_url, placement, sort_order, \
     is_active, starts_at, ends_at, created_at, updated_at";

/// Provides CRUD operations for banners.
pub struct BannerRepo;

impl BannerRepo {
    /// Insert a new banner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBanner) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners \
                (title, subtitle, image_url, link_url, placement, sort_order, starts_at, ends_at) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(&input.placement)
            .bind(input.sort_order)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_one(pool)
            .await
    }

    /// Find a banner by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List banners with an optional placement filter. Inactive rows are
    /// included only when `include_inactive` is set; window filtering is
    /// the caller's concern (`velour_core::site::is_live`).
    pub async fn list(
        pool: &PgPool,
        placement: Option<&str>,
        include_inactive: bool,
    ) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners \
             WHERE (is_active = true OR $2) \
               AND ($1::text IS NULL OR placement = $1) \
             ORDER BY placement ASC, sort_order ASC"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(placement)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a banner. Only non-`None` fields are applied.
    ///
    /// `starts_at`/`ends_at` cannot be cleared through this path; clearing
    /// a window means recreating the banner, which the admin UI does.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBanner,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET \
                title = COALESCE($2, title), \
                subtitle = COALESCE($3, subtitle), \
                image_url = COALESCE($4, image_url), \
                link_url = COALESCE($5, link_url), \
                placement = COALESCE($6, placement), \
                sort_order = COALESCE($7, sort_order), \
                is_active = COALESCE($8, is_active), \
                starts_at = COALESCE($9, starts_at), \
                ends_at = COALESCE($10, ends_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(&input.placement)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a banner by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
