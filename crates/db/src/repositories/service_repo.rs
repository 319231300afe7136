//! Repository for the `services` table.

use sqlx::PgPool;
use velour_core::types::DbId;

use crate::models::service::{CreateService, Service, UpdateService};

const COLUMNS: &str = "id, name, description, category, price_cents, duration_mins, \
     image_url, sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for catalog services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services \
                (name, description, category, price_cents, duration_mins, image_url, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price_cents)
            .bind(input.duration_mins)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a service by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List services ordered for display. Inactive rows are included only
    /// when `include_inactive` is set (admin lists).
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services \
             WHERE is_active = true OR $1 \
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a service. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                price_cents = COALESCE($5, price_cents), \
                duration_mins = COALESCE($6, duration_mins), \
                image_url = COALESCE($7, image_url), \
                sort_order = COALESCE($8, sort_order), \
                is_active = COALESCE($9, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price_cents)
            .bind(input.duration_mins)
            .bind(&input.image_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a service by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation when bookings reference the
    /// service; the API layer maps that to 409.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
