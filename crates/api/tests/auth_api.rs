//! End-to-end tests for registration and login.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{build_test_app, send_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "a-long-enough-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["token"].is_string());
    assert_eq!(body["data"]["user"]["username"], "alice");
    // The password hash must never appear in responses.
    assert!(body["data"]["user"].get("password_hash").is_none());

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({
            "username": "alice",
            "password": "a-long-enough-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    common::register_user(&app, "taken").await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": "taken",
            "email": "other@example.com",
            "password": "a-long-enough-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "short",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_yields_401(pool: PgPool) {
    let app = build_test_app(pool);
    common::register_user(&app, "carol").await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({
            "username": "carol",
            "password": "not-the-right-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_user_yields_same_401_message(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({
            "username": "nobody",
            "password": "whatever-password",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_requires_token(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(&app, Method::GET, "/api/v1/panel", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, _) = send_json(
        &app,
        Method::GET,
        "/api/v1/panel",
        Some("not-a-real-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
