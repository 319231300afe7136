//! HTTP-level integration tests for bookings and the availability grid.

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, NaiveDate, Weekday};
use common::{
    build_test_app, expect_status, get, get_auth, patch_json_auth, post_json, put_json_auth,
    staff_token,
};
use serde_json::json;
use sqlx::PgPool;
use velour_db::models::service::CreateService;
use velour_db::repositories::ServiceRepo;

/// First upcoming date (strictly in the future) that falls on `target`.
fn next_weekday(target: Weekday) -> NaiveDate {
    let mut date = chrono::Utc::now().date_naive() + chrono::Duration::days(1);
    while date.weekday() != target {
        date += chrono::Duration::days(1);
    }
    date
}

async fn seed_service(pool: &PgPool, duration_mins: i32) -> i64 {
    ServiceRepo::create(
        pool,
        &CreateService {
            name: format!("Manicure {duration_mins}"),
            description: None,
            category: "manicure".to_string(),
            price_cents: 4000,
            duration_mins,
            image_url: None,
            sort_order: None,
        },
    )
    .await
    .expect("service insert")
    .id
}

fn booking_payload(service_id: i64, date: NaiveDate, time: &str) -> serde_json::Value {
    json!({
        "customer_name": "Ana Souza",
        "customer_email": "ana@example.com",
        "customer_phone": "+49 30 1234567",
        "service_id": service_id,
        "booking_date": date.to_string(),
        "booking_time": time,
        "nail_shape": "almond",
        "nail_style": "gel"
    })
}

// ---------------------------------------------------------------------------
// Test: public booking submission starts in `pending`
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_starts_pending(pool: PgPool) {
    let service_id = seed_service(&pool, 45).await;
    let date = next_weekday(Weekday::Mon);

    let response = post_json(
        build_test_app(pool),
        "/api/v1/bookings",
        booking_payload(service_id, date, "10:00"),
    )
    .await;
    let body = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["nail_shape"], "almond");
    assert_eq!(body["data"]["booking_time"], "10:00");
}

// ---------------------------------------------------------------------------
// Test: booking rejections (unknown service, bad time, past date, bad shape)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_booking_rejections(pool: PgPool) {
    let service_id = seed_service(&pool, 45).await;
    let date = next_weekday(Weekday::Mon);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(9999, date, "10:00"),
    )
    .await;
    expect_status(response, StatusCode::NOT_FOUND).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, date, "25:00"),
    )
    .await;
    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let yesterday = chrono::Utc::now().date_naive() - chrono::Duration::days(1);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, yesterday, "10:00"),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    // Off the 30-minute grid: valid HH:MM, but never offered as a slot.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, date, "10:15"),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;

    let mut bad_shape = booking_payload(service_id, date, "10:00");
    bad_shape["nail_shape"] = json!("triangle");
    let response = post_json(build_test_app(pool), "/api/v1/bookings", bad_shape).await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: availability on a closed day is empty with null hours
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn availability_closed_day(pool: PgPool) {
    // The seeded opening hours close the salon on Sundays.
    let sunday = next_weekday(Weekday::Sun);
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/bookings/availability?date={sunday}"),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert!(body["data"]["open"].is_null());
    assert!(body["data"]["close"].is_null());
    assert!(body["data"]["slots"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: availability grid on an open day, with booked flags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn availability_grid_marks_booked_slots(pool: PgPool) {
    let service_id = seed_service(&pool, 30).await;
    // Seeded Monday hours are 09:00-18:00: 18 half-hour slots.
    let monday = next_weekday(Weekday::Mon);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, monday, "10:00"),
    )
    .await;
    expect_status(response, StatusCode::CREATED).await;

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/bookings/availability?date={monday}&service_id={service_id}"),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["open"], "09:00");
    assert_eq!(body["data"]["close"], "18:00");

    let slots = body["data"]["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 18);
    assert_eq!(slots[0]["time"], "09:00");
    assert_eq!(slots[17]["time"], "17:30");

    let booked: Vec<_> = slots
        .iter()
        .filter(|s| s["booked"] == true)
        .map(|s| s["time"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(booked, vec!["10:00"]);
}

// ---------------------------------------------------------------------------
// Test: a longer service trims slots that no longer fit before close
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn availability_respects_service_duration(pool: PgPool) {
    let service_id = seed_service(&pool, 60).await;
    let monday = next_weekday(Weekday::Mon);

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/bookings/availability?date={monday}&service_id={service_id}"),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;

    // A 60-minute service cannot start at 17:30; the last slot is 17:00.
    let slots = body["data"]["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 17);
    assert_eq!(slots.last().unwrap()["time"], "17:00");
}

// ---------------------------------------------------------------------------
// Test: staff list bookings with status and date filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_bookings_with_filters(pool: PgPool) {
    let token = staff_token(&pool).await;
    let service_id = seed_service(&pool, 30).await;
    let monday = next_weekday(Weekday::Mon);
    let tuesday = next_weekday(Weekday::Tue);

    for (date, time) in [(monday, "09:00"), (monday, "11:00"), (tuesday, "09:30")] {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/bookings",
            booking_payload(service_id, date, time),
        )
        .await;
        expect_status(response, StatusCode::CREATED).await;
    }

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/bookings?date={monday}"),
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    // Joined service fields come along for the dashboard.
    assert!(data[0]["service_name"].as_str().unwrap().starts_with("Manicure"));

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/bookings?status=pending",
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Pagination combines with the filters; Monday's bookings sort by time.
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/bookings?date={monday}&limit=1&offset=1"),
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    let page = body["data"].as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["booking_time"], "11:00");

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/bookings?status=eaten_by_bear",
        &token,
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: booking status state machine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_status_transitions(pool: PgPool) {
    let token = staff_token(&pool).await;
    let service_id = seed_service(&pool, 30).await;
    let monday = next_weekday(Weekday::Mon);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, monday, "10:00"),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let status_uri = format!("/api/v1/admin/bookings/{id}/status");

    // pending -> completed skips confirmation and is rejected.
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "completed"}),
    )
    .await;
    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // pending -> confirmed -> completed is the happy path.
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "confirmed"}),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["status"], "confirmed");

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &status_uri,
        &token,
        json!({"status": "completed"}),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["status"], "completed");

    // completed is terminal.
    let response = patch_json_auth(
        build_test_app(pool),
        &status_uri,
        &token,
        json!({"status": "cancelled"}),
    )
    .await;
    expect_status(response, StatusCode::BAD_REQUEST).await;
}

// ---------------------------------------------------------------------------
// Test: staff edit of booking details leaves status alone
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_booking_details(pool: PgPool) {
    let token = staff_token(&pool).await;
    let service_id = seed_service(&pool, 30).await;
    let monday = next_weekday(Weekday::Mon);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/bookings",
        booking_payload(service_id, monday, "10:00"),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/bookings/{id}"),
        &token,
        json!({"booking_time": "11:30", "notes": "Allergic to acetone"}),
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["booking_time"], "11:30");
    assert_eq!(body["data"]["notes"], "Allergic to acetone");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["customer_name"], "Ana Souza");

    // Status cannot be smuggled through the edit endpoint.
    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/bookings/{id}"),
        &token,
    )
    .await;
    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["status"], "pending");
}

// ---------------------------------------------------------------------------
// Test: booking queue requires authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_queue_requires_auth(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/admin/bookings").await;
    let body = expect_status(response, StatusCode::UNAUTHORIZED).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}
