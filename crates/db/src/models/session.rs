//! Admin session model and DTOs.

use sqlx::FromRow;
use velour_core::types::{DbId, Timestamp};

/// A refresh-token session row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    /// SHA-256 hex hash of the opaque refresh token; the plaintext is never
    /// stored.
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
