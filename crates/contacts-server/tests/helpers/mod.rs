//! Test helpers for contacts server integration tests
//!
//! Every test drives the full router (middleware included) through
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use contacts_server::{api, auth::PasswordHasher, config::Config, features::FeatureState};
use serde_json::{json, Value};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tower::ServiceExt;

pub const PASSWORD: &str = "rahasia";

pub fn test_app(pool: PgPool) -> Router {
    let state = FeatureState {
        db: pool,
        passwords: PasswordHasher::with_params(1024, 1, 1).unwrap(),
    };
    api::create_router(state, &Config::default())
}

/// Router whose pool never connects; only usable for paths that fail
/// before touching the database.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgresql://localhost:1/unreachable")
        .unwrap();
    test_app(pool)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("X-API-TOKEN", token);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse { status, body }
}

pub async fn register(app: &Router, username: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({ "username": username, "password": PASSWORD, "name": format!("{username} name") })),
    )
    .await
}

pub async fn login(app: &Router, username: &str) -> TestResponse {
    send(
        app,
        Method::POST,
        "/api/users/login",
        None,
        Some(json!({ "username": username, "password": PASSWORD })),
    )
    .await
}

/// Registers `username`, logs in, and returns the token.
pub async fn user_token(app: &Router, username: &str) -> String {
    assert_eq!(register(app, username).await.status, StatusCode::CREATED);
    let response = login(app, username).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"]["token"].as_str().unwrap().to_string()
}

/// Creates a contact and returns its id.
pub async fn create_contact(app: &Router, token: &str, body: Value) -> i64 {
    let response = send(app, Method::POST, "/api/contacts", Some(token), Some(body)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.body["data"]["id"].as_i64().unwrap()
}

/// Creates an address under `contact_id` and returns its id.
pub async fn create_address(app: &Router, token: &str, contact_id: i64, body: Value) -> i64 {
    let uri = format!("/api/contacts/{contact_id}/addresses");
    let response = send(app, Method::POST, &uri, Some(token), Some(body)).await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.body["data"]["id"].as_i64().unwrap()
}

/// Parses the issues out of a `{"error": "Validation Error: ..."}` body.
pub fn validation_issues(body: &Value) -> Value {
    let message = body["error"].as_str().unwrap();
    let detail = message.strip_prefix("Validation Error: ").unwrap();
    serde_json::from_str::<Value>(detail).unwrap()["issues"].clone()
}

pub fn issue_fields(body: &Value) -> Vec<String> {
    validation_issues(body)
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap().to_string())
        .collect()
}
