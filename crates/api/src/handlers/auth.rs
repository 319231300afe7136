//! Authentication handlers: login, token refresh, logout, and `me`.
//!
//! Login verifies an Argon2id password hash and issues a short-lived JWT
//! access token plus an opaque refresh token. Refresh rotates the session:
//! the presented token's session is revoked and a new one is created.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use velour_core::error::CoreError;
use velour_db::models::session::CreateSession;
use velour_db::models::user::{User, UserResponse};
use velour_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login/refresh response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// Refresh/logout request payload.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

fn invalid_credentials() -> AppError {
    // One message for unknown user, wrong password, and disabled account,
    // so login responses do not leak which usernames exist.
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// Issue an access/refresh token pair and persist the session.
async fn issue_tokens(state: &AppState, user: &User) -> AppResult<TokenResponse> {
    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;
    let (refresh_token, refresh_hash) = generate_refresh_token();

    let expires_at =
        chrono::Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(TokenResponse {
        access_token,
        refresh_token,
        user: UserResponse::from(user.clone()),
    })
}

// ---------------------------------------------------------------------------
// POST /auth/login
// ---------------------------------------------------------------------------

/// Authenticate with username and password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified || !user.is_active {
        return Err(invalid_credentials());
    }

    UserRepo::record_login(&state.pool, user.id).await?;
    let tokens = issue_tokens(&state, &user).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(Json(DataResponse { data: tokens }))
}

// ---------------------------------------------------------------------------
// POST /auth/refresh
// ---------------------------------------------------------------------------

/// Exchange a refresh token for a new token pair.
///
/// The presented token's session is revoked before the new pair is issued,
/// so each refresh token works exactly once.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_valid_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(invalid_credentials)?;

    SessionRepo::revoke(&state.pool, session.id).await?;
    let tokens = issue_tokens(&state, &user).await?;
    tracing::debug!(user_id = user.id, "Session refreshed");
    Ok(Json(DataResponse { data: tokens }))
}

// ---------------------------------------------------------------------------
// POST /auth/logout
// ---------------------------------------------------------------------------

/// Revoke the presented refresh token's session.
///
/// Succeeds even when the token is already invalid, so logout is
/// idempotent.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<StatusCode> {
    let hash = hash_refresh_token(&input.refresh_token);
    if let Some(session) = SessionRepo::find_valid_by_hash(&state.pool, &hash).await? {
        SessionRepo::revoke(&state.pool, session.id).await?;
        tracing::info!(user_id = session.user_id, "User logged out");
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /auth/logout-all
// ---------------------------------------------------------------------------

/// Revoke every live session belonging to the authenticated user.
pub async fn logout_all(user: AuthUser, State(state): State<AppState>) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    tracing::info!(user_id = user.user_id, revoked, "All sessions revoked");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /auth/me
// ---------------------------------------------------------------------------

/// Return the authenticated user's profile.
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let u = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(u),
    }))
}
