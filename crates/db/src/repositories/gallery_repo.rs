//! Repository for the `gallery_items` table.

use sqlx::PgPool;
use velour_core::types::DbId;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};

const COLUMNS: &str = "id, title, image_url, category, nail_shape, nail_style, \
     is_featured, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for gallery items.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items \
                (title, image_url, category, nail_shape, nail_style, is_featured, sort_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), COALESCE($7, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.nail_shape)
            .bind(&input.nail_style)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_items WHERE id = $1");
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List gallery items for display, with optional category and featured
    /// filters. Inactive rows are included only when `include_inactive` is
    /// set (admin lists).
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        featured: Option<bool>,
        include_inactive: bool,
    ) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_items \
             WHERE (is_active = true OR $3) \
               AND ($1::text IS NULL OR category = $1) \
               AND ($2::bool IS NULL OR is_featured = $2) \
             ORDER BY sort_order ASC, created_at DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(category)
            .bind(featured)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a gallery item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET \
                title = COALESCE($2, title), \
                image_url = COALESCE($3, image_url), \
                category = COALESCE($4, category), \
                nail_shape = COALESCE($5, nail_shape), \
                nail_style = COALESCE($6, nail_style), \
                is_featured = COALESCE($7, is_featured), \
                sort_order = COALESCE($8, sort_order), \
                is_active = COALESCE($9, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(&input.nail_shape)
            .bind(&input.nail_style)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a gallery item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
