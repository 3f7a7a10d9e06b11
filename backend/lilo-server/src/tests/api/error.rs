use crate::ApiError;

use lilo_auth::AuthError;
use lilo_core::CoreError;
use lilo_store::StoreError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found("Item not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("name is required", Some("name")).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_auth_error_returns_401_with_stable_code() {
    let error: ApiError = AuthError::TokenExpired {
        exp: 0,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
    assert_eq!(json["error"]["message"], "Token expired");
}

#[tokio::test]
async fn test_ownership_mismatch_is_indistinguishable_from_missing() {
    let mismatch: ApiError = StoreError::OwnershipMismatch {
        id: "item-1".into(),
        owner: "intruder".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let missing: ApiError = StoreError::NotFound {
        id: "item-1".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let mismatch = mismatch.into_response();
    let missing = missing.into_response();

    assert_eq!(mismatch.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(mismatch).await, body_json(missing).await);
}

#[tokio::test]
async fn test_duplicate_key_returns_409() {
    let error: ApiError = StoreError::DuplicateKey {
        key: "ext-1".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_entity_returns_500_without_detail() {
    let error: ApiError = StoreError::InvalidEntity {
        message: "internal detail".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("internal detail"));
}

#[tokio::test]
async fn test_invalid_feedback_maps_to_feedback_field() {
    let error: ApiError = CoreError::InvalidFeedback {
        value: "meh".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "feedback");
    assert!(json["error"]["message"].as_str().unwrap().contains("meh"));
}
