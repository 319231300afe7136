//! HTTP-level integration tests for login, refresh rotation, and logout.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, expect_status, get_auth, post_json, seed_user};
use serde_json::json;
use sqlx::PgPool;

const PASSWORD: &str = "correct-horse-battery";

async fn login(pool: &PgPool, username: &str, password: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({"username": username, "password": password}),
    )
    .await;
    expect_status(response, StatusCode::OK).await
}

// ---------------------------------------------------------------------------
// Test: login returns tokens and a sanitized user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_tokens(pool: PgPool) {
    let id = seed_user(&pool, "owner", PASSWORD, "admin").await;

    let body = login(&pool, "owner", PASSWORD).await;
    assert!(body["data"]["access_token"].is_string());
    assert!(body["data"]["refresh_token"].is_string());
    assert_eq!(body["data"]["user"]["id"], id);
    assert_eq!(body["data"]["user"]["role"], "admin");
    // The password hash must never leave the server.
    assert!(body["data"]["user"].get("password_hash").is_none());

    // The access token works against a protected endpoint.
    let token = body["data"]["access_token"].as_str().unwrap();
    let response = get_auth(build_test_app(pool), "/api/v1/auth/me", token).await;
    let me = expect_status(response, StatusCode::OK).await;
    assert_eq!(me["data"]["username"], "owner");
}

// ---------------------------------------------------------------------------
// Test: wrong password, unknown user, and disabled account all look alike
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejections_are_uniform(pool: PgPool) {
    let id = seed_user(&pool, "owner", PASSWORD, "admin").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({"username": "owner", "password": "wrong-password-entirely"}),
    )
    .await;
    let wrong_pw = expect_status(response, StatusCode::UNAUTHORIZED).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({"username": "nobody", "password": PASSWORD}),
    )
    .await;
    let unknown = expect_status(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(wrong_pw["error"], unknown["error"]);

    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();
    let response = post_json(
        build_test_app(pool),
        "/api/v1/auth/login",
        json!({"username": "owner", "password": PASSWORD}),
    )
    .await;
    let disabled = expect_status(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(wrong_pw["error"], disabled["error"]);
}

// ---------------------------------------------------------------------------
// Test: refresh rotates the session; the old token works exactly once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_session(pool: PgPool) {
    seed_user(&pool, "owner", PASSWORD, "admin").await;
    let body = login(&pool, "owner", PASSWORD).await;
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    let refreshed = expect_status(response, StatusCode::OK).await;
    let new_refresh = refreshed["data"]["refresh_token"].as_str().unwrap();
    assert_ne!(new_refresh, refresh_token);

    // Reusing the consumed token fails.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    expect_status(response, StatusCode::UNAUTHORIZED).await;

    // The rotated token still works.
    let response = post_json(
        build_test_app(pool),
        "/api/v1/auth/refresh",
        json!({"refresh_token": new_refresh}),
    )
    .await;
    expect_status(response, StatusCode::OK).await;
}

// ---------------------------------------------------------------------------
// Test: logout revokes the session and is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_session(pool: PgPool) {
    seed_user(&pool, "owner", PASSWORD, "admin").await;
    let body = login(&pool, "owner", PASSWORD).await;
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Revoked tokens cannot refresh.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    expect_status(response, StatusCode::UNAUTHORIZED).await;

    // A second logout with the dead token still succeeds.
    let response = post_json(
        build_test_app(pool),
        "/api/v1/auth/logout",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: logout-all kills every session for the user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_all_revokes_every_session(pool: PgPool) {
    seed_user(&pool, "owner", PASSWORD, "admin").await;
    let first = login(&pool, "owner", PASSWORD).await;
    let second = login(&pool, "owner", PASSWORD).await;
    let access = second["data"]["access_token"].as_str().unwrap();

    let response = common::post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/auth/logout-all",
        access,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for body in [&first, &second] {
        let refresh = body["data"]["refresh_token"].as_str().unwrap();
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/auth/refresh",
            json!({"refresh_token": refresh}),
        )
        .await;
        expect_status(response, StatusCode::UNAUTHORIZED).await;
    }
}

// ---------------------------------------------------------------------------
// Test: me without a token is 401, with garbage is 401
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn me_requires_valid_token(pool: PgPool) {
    let response = common::get(build_test_app(pool.clone()), "/api/v1/auth/me").await;
    expect_status(response, StatusCode::UNAUTHORIZED).await;

    let response = get_auth(build_test_app(pool), "/api/v1/auth/me", "not-a-jwt").await;
    expect_status(response, StatusCode::UNAUTHORIZED).await;
}
