//! Repository for the `business_info` singleton table.
//!
//! The table holds exactly one row with id = 1, seeded by migration. Reads
//! therefore never miss in a migrated database, and saves are upserts
//! pinned to that id so a second row can never appear.

use sqlx::PgPool;

use crate::models::business_info::{BusinessInfo, SaveBusinessInfo};

const COLUMNS: &str = "id, salon_name, tagline, phone, email, address, instagram, facebook, \
     opening_hours, created_at, updated_at";

/// Fixed primary key of the singleton row.
const SINGLETON_ID: i64 = 1;

/// Provides read/upsert access to the business info singleton.
pub struct BusinessInfoRepo;

impl BusinessInfoRepo {
    /// Fetch the singleton row.
    pub async fn get(pool: &PgPool) -> Result<Option<BusinessInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM business_info WHERE id = $1");
        sqlx::query_as::<_, BusinessInfo>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Replace the singleton row, creating it if the seed was removed.
    pub async fn save(
        pool: &PgPool,
        input: &SaveBusinessInfo,
    ) -> Result<BusinessInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO business_info \
                (id, salon_name, tagline, phone, email, address, instagram, facebook, opening_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                salon_name = EXCLUDED.salon_name, \
                tagline = EXCLUDED.tagline, \
                phone = EXCLUDED.phone, \
                email = EXCLUDED.email, \
                address = EXCLUDED.address, \
                instagram = EXCLUDED.instagram, \
                facebook = EXCLUDED.facebook, \
                opening_hours = EXCLUDED.opening_hours \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusinessInfo>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.salon_name)
            .bind(&input.tagline)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.instagram)
            .bind(&input.facebook)
            .bind(&input.opening_hours)
            .fetch_one(pool)
            .await
    }
}
