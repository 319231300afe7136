//! HTTP-level integration tests for contact inquiries and the inbox
//! state machine.

mod common;

use axum::http::StatusCode;
use common::{
    build_test_app, delete_auth, expect_status, get_auth, patch_json_auth, post_json, staff_token,
};
use serde_json::json;
use sqlx::PgPool;

fn inquiry() -> serde_json::Value {
    json!({
        "name": "Leah Kim",
        "email": "leah@example.com",
        "subject": "Bridal party",
        "message": "Do you take group bookings for six people on a Saturday?"
    })
}

async fn submit(pool: &PgPool) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/contacts", inquiry()).await;
    let body = expect_status(response, StatusCode::CREATED).await;
    body["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: public submission starts in `new`
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_contact_starts_new(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/v1/contacts", inquiry()).await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["data"]["status"], "new");
    assert_eq!(body["data"]["name"], "Leah Kim");
}

// ---------------------------------------------------------------------------
// Test: form validation failures return 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_contact_validation_errors(pool: PgPool) {
    let mut bad_email = inquiry();
    bad_email["email"] = json!("not-an-email");
    let response = post_json(build_test_app(pool.clone()), "/api/v1/contacts", bad_email).await;
    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let mut empty_message = inquiry();
    empty_message["message"] = json!("   ");
    let response = post_json(build_test_app(pool), "/api/v1/contacts", empty_message).await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: staff list inquiries with a status filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_contacts_filtered_by_status(pool: PgPool) {
    let token = staff_token(&pool).await;
    let first = submit(&pool).await;
    submit(&pool).await;

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/contacts/{first}/status"),
        &token,
        json!({"status": "read"}),
    )
    .await;
    expect_status(response, StatusCode::OK).await;

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/contacts?status=new",
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/contacts",
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Newest first, so the first submission sits on the second page.
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/contacts?limit=1&offset=1",
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    let page = body["data"].as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], first);
}

// ---------------------------------------------------------------------------
// Test: inbox transitions are forward-only, archived is terminal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_status_is_forward_only(pool: PgPool) {
    let token = staff_token(&pool).await;
    let id = submit(&pool).await;
    let status_uri = format!("/api/v1/admin/contacts/{id}/status");

    // new -> replied skips `read` but still moves forward, so it is allowed.
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "replied"}),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["status"], "replied");

    // Moving backwards is rejected.
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "read"}),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "archived"}),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["status"], "archived");

    // Archived inquiries stay archived.
    let response = patch_json_auth(
        build_test_app(pool),
        &status_uri,
        &token,
        json!({"status": "new"}),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: delete removes the inquiry, second delete is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_contact(pool: PgPool) {
    let token = staff_token(&pool).await;
    let id = submit(&pool).await;
    let uri = format!("/api/v1/admin/contacts/{id}");

    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(build_test_app(pool), &uri, &token).await;
    expect_status(response, StatusCode::NOT_FOUND).await;
}
