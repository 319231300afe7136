//! Repository for the nail shape/style option tables.
//!
//! `nail_shapes` and `nail_styles` share a schema, so one repository
//! serves both; [`OptionKind`] picks the table. Deletes are soft
//! (`is_active = false`) so historical bookings keep valid labels.

use sqlx::PgPool;
use velour_core::types::DbId;

use crate::models::option_item::{CreateOptionItem, OptionItem};

const COLUMNS: &str = "id, name, label, sort_order, is_active, created_at, updated_at";

/// Which option table a call operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Shape,
    Style,
}

impl OptionKind {
    /// Table name; a fixed string per variant, never user input.
    fn table(self) -> &'static str {
        match self {
            OptionKind::Shape => "nail_shapes",
            OptionKind::Style => "nail_styles",
        }
    }

    /// Entity name for error messages.
    pub fn entity(self) -> &'static str {
        match self {
            OptionKind::Shape => "NailShape",
            OptionKind::Style => "NailStyle",
        }
    }
}

/// Provides CRUD operations for nail shape/style options.
pub struct OptionRepo;

impl OptionRepo {
    /// Insert a new option, returning the created row.
    pub async fn create(
        pool: &PgPool,
        kind: OptionKind,
        input: &CreateOptionItem,
    ) -> Result<OptionItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (name, label, sort_order) \
             VALUES ($1, $2, COALESCE($3, 0)) \
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, OptionItem>(&query)
            .bind(&input.name)
            .bind(&input.label)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// List options in display order. Inactive rows are included only when
    /// `include_inactive` is set (admin lists).
    pub async fn list(
        pool: &PgPool,
        kind: OptionKind,
        include_inactive: bool,
    ) -> Result<Vec<OptionItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} \
             WHERE is_active = true OR $1 \
             ORDER BY sort_order ASC, name ASC",
            table = kind.table()
        );
        sqlx::query_as::<_, OptionItem>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Whether an active option with this machine name exists.
    pub async fn exists_active(
        pool: &PgPool,
        kind: OptionKind,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE name = $1 AND is_active = true)",
            table = kind.table()
        );
        let (exists,): (bool,) = sqlx::query_as(&query).bind(name).fetch_one(pool).await?;
        Ok(exists)
    }

    /// Soft-delete an option (set `is_active = false`). Returns `true` if
    /// an active row was deactivated.
    pub async fn deactivate(
        pool: &PgPool,
        kind: OptionKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET is_active = false WHERE id = $1 AND is_active = true",
            table = kind.table()
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
