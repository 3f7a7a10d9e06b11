use crate::Claims;

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Map, json};

pub const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// 2026-01-01T00:00:00Z, the reference instant for every test
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

pub fn valid_claims(sub: &str) -> Claims {
    let mut metadata = Map::new();
    metadata.insert("name".to_string(), json!("Ada"));
    metadata.insert("avatar_url".to_string(), json!("https://img.example/ada.png"));

    Claims {
        sub: sub.to_string(),
        email: "a@b.com".to_string(),
        exp: now().timestamp() + 3600,
        iat: Some(now().timestamp()),
        role: Some("authenticated".to_string()),
        user_metadata: metadata,
    }
}

pub fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    create_test_token_with(Algorithm::HS256, claims, secret)
}

pub fn create_test_token_with(algorithm: Algorithm, claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}
