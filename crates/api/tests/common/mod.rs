//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of the `#[sqlx::test]`-provisioned pool, plus request helpers and
//! user seeding for authenticated endpoints.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use velour_api::auth::jwt::{generate_access_token, JwtConfig};
use velour_api::auth::password::hash_password;
use velour_api::config::ServerConfig;
use velour_api::router::build_app_router;
use velour_api::state::AppState;
use velour_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 20,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as production, so tests
/// exercise CORS, request IDs, timeouts, and panic recovery too.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user with the given role and return its id.
pub async fn seed_user(pool: &PgPool, username: &str, password: &str, role: &str) -> DbId {
    let hash = hash_password(password).expect("password hashing");
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash, role) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("user insert");
    id
}

/// Seed an admin user and return a bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let id = seed_user(pool, "test-admin", "test-admin-password", "admin").await;
    token_for(id, "admin")
}

/// Seed a staff user and return a bearer token for it.
pub async fn staff_token(pool: &PgPool) -> String {
    let id = seed_user(pool, "test-staff", "test-staff-password", "staff").await;
    token_for(id, "staff")
}

/// Generate an access token signed with the test secret.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a status and return the parsed body, panicking with the body text
/// on mismatch so failures are debuggable.
pub async fn expect_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let body = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    body
}
