//! Integration tests for the auth gate in front of every protected route
mod common;

use crate::common::{
    SECRET, bearer_for, claims_for, create_test_app, create_test_app_state, create_token, now,
    send,
};

use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

#[tokio::test]
async fn test_missing_authorization_returns_401() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());

    let (status, json) = send(&app, "GET", "/api/wardrobe/items", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_CREDENTIAL");
    assert_eq!(state.users.count(), 0);
}

#[tokio::test]
async fn test_basic_scheme_returns_401() {
    let app = create_test_app(create_test_app_state());

    let (status, json) = send(
        &app,
        "GET",
        "/api/auth/user",
        Some("Basic dXNlcjpwYXNz"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIAL_FORMAT");
}

#[tokio::test]
async fn test_empty_bearer_token_returns_401() {
    let app = create_test_app(create_test_app_state());

    let (status, json) = send(&app, "GET", "/api/auth/user", Some("Bearer "), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIAL_FORMAT");
}

#[tokio::test]
async fn test_garbage_token_returns_401_malformed() {
    let app = create_test_app(create_test_app_state());

    let (status, json) = send(
        &app,
        "GET",
        "/api/auth/user",
        Some("Bearer not.a.jwt"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_MALFORMED");
}

#[tokio::test]
async fn test_expired_token_returns_401_and_creates_no_user() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());
    let mut claims = claims_for("ext-1");
    claims.exp = now().timestamp() - 1;
    let header = format!("Bearer {}", create_token(&claims, SECRET));

    let (status, json) = send(&app, "POST", "/api/wardrobe/items", Some(&header), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(state.users.count(), 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_returns_401() {
    let app = create_test_app(create_test_app_state());
    let token = create_token(
        &claims_for("ext-1"),
        b"a-completely-different-secret-value!!",
    );

    let (status, json) = send(
        &app,
        "GET",
        "/api/auth/user",
        Some(&format!("Bearer {}", token)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_SIGNATURE_INVALID");
}

#[tokio::test]
async fn test_hs512_token_with_right_secret_is_accepted() {
    let app = create_test_app(create_test_app_state());
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims_for("ext-512"),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let (status, json) = send(
        &app,
        "GET",
        "/api/auth/user",
        Some(&format!("Bearer {}", token)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["externalId"], "ext-512");
}

#[tokio::test]
async fn test_rejected_request_never_reaches_handler() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());

    let (status, _) = send(
        &app,
        "POST",
        "/api/wardrobe/items",
        Some("Bearer not.a.jwt"),
        Some(common::shirt()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(state.users.count(), 0);
}

#[tokio::test]
async fn test_first_request_provisions_user_from_claims() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());

    let (status, json) = send(&app, "GET", "/api/auth/user", Some(&bearer_for("ext-1")), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["externalId"], "ext-1");
    assert_eq!(json["data"]["email"], "ext-1@example.com");
    assert_eq!(json["data"]["name"], "User ext-1");
    assert_eq!(json["data"]["picture"], "https://img.example/ext-1.png");
    assert_eq!(state.users.count(), 1);
}

#[tokio::test]
async fn test_repeat_requests_resolve_to_same_user() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());
    let header = bearer_for("ext-1");

    let (_, first) = send(&app, "GET", "/api/auth/user", Some(&header), None).await;
    let (_, second) = send(&app, "GET", "/api/auth/user", Some(&header), None).await;

    assert_eq!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(state.users.count(), 1);
}

#[tokio::test]
async fn test_concurrent_first_requests_create_one_user() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());
    let header = bearer_for("ext-race");

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = app.clone();
        let header = header.clone();
        handles.push(tokio::spawn(async move {
            send(&app, "GET", "/api/auth/user", Some(&header), None).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        ids.push(json["data"]["id"].as_str().unwrap().to_string());
    }

    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(state.users.count(), 1);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = create_test_app(create_test_app_state());

    let (status, json) = send(&app, "GET", "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
}
