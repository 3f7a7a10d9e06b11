#![allow(dead_code)]

//! Test infrastructure for lilo-server API tests

use lilo_auth::{Claims, FixedClock};
use lilo_config::ServerConfig;
use lilo_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Map, Value, json};
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// 2026-01-01T00:00:00Z; the clock every test server runs on
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// AppState with a fixed clock and a seeded RNG
pub fn create_test_app_state() -> AppState {
    AppState::with_parts(
        SECRET,
        Arc::new(FixedClock(now())),
        StdRng::seed_from_u64(42),
    )
}

pub fn create_test_app(state: AppState) -> Router {
    build_router(state, &ServerConfig::default())
}

pub fn claims_for(sub: &str) -> Claims {
    let mut metadata = Map::new();
    metadata.insert("name".to_string(), json!(format!("User {}", sub)));
    metadata.insert(
        "avatar_url".to_string(),
        json!(format!("https://img.example/{}.png", sub)),
    );

    Claims {
        sub: sub.to_string(),
        email: format!("{}@example.com", sub),
        exp: now().timestamp() + 3600,
        iat: Some(now().timestamp()),
        role: Some("authenticated".to_string()),
        user_metadata: metadata,
    }
}

pub fn create_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

/// `Authorization` header value for a valid token for `sub`
pub fn bearer_for(sub: &str) -> String {
    format!("Bearer {}", create_token(&claims_for(sub), SECRET))
}

/// Send one request through the router and decode the JSON body
/// (`Value::Null` for an empty or non-JSON body)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Create a clothing item as `sub` and return its id
pub async fn create_item(app: &Router, sub: &str, body: Value) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/wardrobe/items",
        Some(&bearer_for(sub)),
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json["data"]["id"].as_str().unwrap().to_string()
}

/// Create an outfit over `items` as `sub` and return its id
pub async fn create_outfit(app: &Router, sub: &str, name: &str, items: &[String]) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/outfits",
        Some(&bearer_for(sub)),
        Some(json!({ "name": name, "items": items })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", json);
    json["data"]["id"].as_str().unwrap().to_string()
}

pub fn shirt() -> Value {
    json!({ "name": "Blue Shirt", "category": "tops", "color": "blue" })
}
