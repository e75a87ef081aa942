//! End-to-end tests for the catalogue endpoints: bands, records, pagination
//! clamping, and the composite record detail view.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, register_user, send_json};

async fn create_label(app: &axum::Router, token: &str, name: &str) -> i64 {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/v1/labels",
        Some(token),
        Some(json!({ "name": name, "city": "Oslo", "country": "Norway" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "label create failed: {body}");
    body["data"]["id"].as_i64().unwrap()
}

async fn create_band(app: &axum::Router, token: &str, name: &str) -> i64 {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/v1/bands",
        Some(token),
        Some(json!({ "name": name, "origin": "Oslo, Norway" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "band create failed: {body}");
    body["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn band_crud_via_http(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register_user(&app, "curator").await;

    create_band(&app, &token, "Black Sabbath").await;

    // Public detail by slug.
    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/black-sabbath", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Black Sabbath");
    assert_eq!(body["data"]["create_by"], "curator");

    // Rename keeps the slug.
    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/v1/bands/black-sabbath",
        Some(&token),
        Some(json!({ "name": "Heaven and Hell" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Heaven and Hell");
    assert_eq!(body["data"]["slug"], "black-sabbath");

    // Delete, then 404.
    let (status, _) = send_json(
        &app,
        Method::DELETE,
        "/api/v1/bands/black-sabbath",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/black-sabbath", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_require_authentication(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/bands",
        None,
        Some(json!({ "name": "Anonymous Band", "origin": "Nowhere" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pagination_clamps_gracefully(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register_user(&app, "curator").await;

    // 20 bands means 2 pages at 15 per page.
    for i in 0..20 {
        create_band(&app, &token, &format!("Band {i:02}")).await;
    }

    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/page/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["total_items"], 20);
    assert_eq!(body["data"].as_array().unwrap().len(), 15);

    // Out-of-range page clamps to the last page instead of erroring.
    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/page/9999", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    // Non-numeric page serves page 1.
    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/page/abc", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);

    // Zero and negative pages serve page 1 too.
    let (status, body) = send_json(&app, Method::GET, "/api/v1/bands/page/0", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_listing_serves_single_empty_page(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/records/page/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["total_items"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_detail_composite_view(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register_user(&app, "curator").await;

    let label_id = create_label(&app, &token, "Vertigo").await;
    let band_id = create_band(&app, &token, "Black Sabbath").await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/records",
        Some(&token),
        Some(json!({
            "title": "Paranoid",
            "release_date": "1970-09-18",
            "label_id": label_id,
            "band_ids": [band_id],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "record create failed: {body}");

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/records/paranoid/tracks",
        Some(&token),
        Some(json!({ "name": "War Pigs", "number": 1, "duration_secs": 478 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Anonymous view: no reviews yet, no average, not authenticated.
    let (status, body) = send_json(&app, Method::GET, "/api/v1/records/paranoid", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["record"]["title"], "Paranoid");
    assert_eq!(data["label"]["name"], "Vertigo");
    assert_eq!(data["bands"][0]["name"], "Black Sabbath");
    assert_eq!(data["tracks"][0]["name"], "War Pigs");
    assert!(data["average_score"].is_null());
    assert_eq!(data["reviews"].as_array().unwrap().len(), 0);
    assert!(data["own_review"].is_null());
    assert_eq!(data["authenticated"], false);

    // Signed-in view flags authentication.
    let (status, body) =
        send_json(&app, Method::GET, "/api/v1/records/paranoid", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["authenticated"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_create_with_unknown_label_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register_user(&app, "curator").await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/records",
        Some(&token),
        Some(json!({
            "title": "Orphan",
            "release_date": "2000-01-01",
            "label_id": 99999,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
