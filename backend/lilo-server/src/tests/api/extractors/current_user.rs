use crate::{ApiError, AppState, CurrentUser};

use lilo_auth::{Claims, FixedClock};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Map;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn create_test_state() -> AppState {
    AppState::with_parts(
        SECRET,
        Arc::new(FixedClock(now())),
        StdRng::seed_from_u64(7),
    )
}

fn create_test_token(sub: &str, exp: i64) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        email: format!("{}@example.com", sub),
        exp,
        iat: None,
        role: None,
        user_metadata: Map::new(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

async fn extract(state: &AppState, authorization: Option<&str>) -> Result<CurrentUser, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    CurrentUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_provisions_user_from_valid_token() {
    let state = create_test_state();
    let token = create_test_token("ext-1", now().timestamp() + 60);

    let result = extract(&state, Some(&format!("Bearer {}", token))).await;

    let CurrentUser(user) = result.unwrap();
    assert_eq!(user.external_id, "ext-1");
    assert_eq!(user.email, "ext-1@example.com");
    assert_eq!(state.users.count(), 1);
}

#[tokio::test]
async fn test_extractor_reuses_existing_user() {
    let state = create_test_state();
    let header = format!("Bearer {}", create_test_token("ext-1", now().timestamp() + 60));

    let first = extract(&state, Some(&header)).await.unwrap();
    let second = extract(&state, Some(&header)).await.unwrap();

    assert_eq!(first.0.id, second.0.id);
    assert_eq!(state.users.count(), 1);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state();

    let result = extract(&state, None).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_CREDENTIAL",
            ..
        })
    ));
    assert_eq!(state.users.count(), 0);
}

#[tokio::test]
async fn test_extractor_rejects_basic_scheme() {
    let state = create_test_state();

    let result = extract(&state, Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "INVALID_CREDENTIAL_FORMAT",
            ..
        })
    ));
}

#[tokio::test]
async fn test_extractor_rejects_expired_token_at_boundary() {
    let state = create_test_state();
    let token = create_test_token("ext-1", now().timestamp());

    let result = extract(&state, Some(&format!("Bearer {}", token))).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "TOKEN_EXPIRED",
            ..
        })
    ));
    assert_eq!(state.users.count(), 0);
}
