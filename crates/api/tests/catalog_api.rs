//! HTTP-level integration tests for the service catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, build_test_app, delete_auth, expect_status, get, get_auth, post_json,
    post_json_auth, put_json_auth, staff_token,
};
use serde_json::json;
use sqlx::PgPool;

fn gel_manicure() -> serde_json::Value {
    json!({
        "name": "Gel manicure",
        "description": "Classic gel manicure with cuticle care",
        "category": "manicure",
        "price_cents": 4500,
        "duration_mins": 45
    })
}

// ---------------------------------------------------------------------------
// Test: admin creates a service, public list shows it
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_service_appears_in_public_list(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        gel_manicure(),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(created["data"]["name"], "Gel manicure");
    assert_eq!(created["data"]["price_cents"], 4500);
    assert_eq!(created["data"]["is_active"], true);

    let response = get(build_test_app(pool), "/api/v1/services").await;
    let json = expect_status(response, StatusCode::OK).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Gel manicure");
}

// ---------------------------------------------------------------------------
// Test: create validation failures return 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_service_validation_errors(pool: PgPool) {
    let token = admin_token(&pool).await;

    let mut negative_price = gel_manicure();
    negative_price["price_cents"] = json!(-100);
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        negative_price,
    )
    .await;
    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let mut off_grid_duration = gel_manicure();
    off_grid_duration["duration_mins"] = json!(47);
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        off_grid_duration,
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    let mut bad_category = gel_manicure();
    bad_category["category"] = json!("haircuts");
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/services",
        &token,
        bad_category,
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: deactivated service disappears from the public site
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_service_hidden_from_public(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        gel_manicure(),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/services/{id}"),
        &token,
        json!({"is_active": false}),
    )
    .await;
    expect_status(response, StatusCode::OK).await;

    // Gone from the public list and detail view.
    let response = get(build_test_app(pool.clone()), "/api/v1/services").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/services/{id}"),
    )
    .await;
    expect_status(response, StatusCode::NOT_FOUND).await;

    // Still visible to the admin.
    let response = get_auth(build_test_app(pool), "/api/v1/admin/services", &token).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: partial update only touches provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_service_is_partial(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        gel_manicure(),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/services/{id}"),
        &token,
        json!({"price_cents": 5000}),
    )
    .await;
    let updated = expect_status(response, StatusCode::OK).await;
    assert_eq!(updated["data"]["price_cents"], 5000);
    assert_eq!(updated["data"]["name"], "Gel manicure");
    assert_eq!(updated["data"]["duration_mins"], 45);
}

// ---------------------------------------------------------------------------
// Test: updating a missing service returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_service_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = put_json_auth(
        build_test_app(pool),
        "/api/v1/admin/services/9999",
        &token,
        json!({"price_cents": 5000}),
    )
    .await;
    let body = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: deleting a booked service returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_booked_service_returns_conflict(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        &token,
        gel_manicure(),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Book the service through the public endpoint.
    let date = chrono::Utc::now().date_naive() + chrono::Duration::days(7);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        json!({
            "customer_name": "Mia Park",
            "customer_email": "mia@example.com",
            "service_id": id,
            "booking_date": date.to_string(),
            "booking_time": "10:00"
        }),
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/services/{id}"),
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(body["code"], "CONFLICT");

    // Without bookings the delete goes through.
    sqlx::query("DELETE FROM bookings WHERE service_id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();
    let response = delete_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/services/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: admin catalog endpoints reject missing and underprivileged tokens
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_catalog_requires_admin_role(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/admin/services",
        gel_manicure(),
    )
    .await;
    expect_status(response, StatusCode::UNAUTHORIZED).await;

    let staff = staff_token(&pool).await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/services",
        &staff,
        gel_manicure(),
    )
    .await;
    let body = expect_status(response, StatusCode::FORBIDDEN).await;
    assert_eq!(body["code"], "FORBIDDEN");
}
