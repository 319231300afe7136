//! Repository for the `contacts` table.

use sqlx::PgPool;
use velour_core::contact::STATUS_NEW;
use velour_core::types::DbId;

use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, name, email, phone, subject, message, status, \
     created_at, updated_at";

/// Provides CRUD operations for contact inquiries.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new inquiry with status `new`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, subject, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    /// Find an inquiry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List inquiries newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set an inquiry's status. The transition is validated by the caller.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an inquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
