#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_auth::{JwtValidator, PasswordHasher, TokenIssuer};
use um_db::UserRepository;
use um_identity::IdentityService;
use um_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const SECRET: &[u8] = b"server-test-secret-at-least-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let identity = IdentityService::new(
        UserRepository::new(create_test_pool().await),
        PasswordHasher::new(4),
        TokenIssuer::with_hs256(SECRET),
        chrono::Duration::hours(24),
    );

    AppState {
        identity: Arc::new(identity),
        validator: Arc::new(JwtValidator::with_hs256(SECRET)),
    }
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Send a request and return status plus parsed JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Register through the API and return (token, user id)
pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> (String, String) {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {json}");

    (
        json["token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_str().unwrap().to_string(),
    )
}
