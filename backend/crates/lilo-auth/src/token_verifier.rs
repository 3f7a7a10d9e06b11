use crate::{AuthError, Claims, HmacAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

/// Only the part of the JOSE header read before verification
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Verifies HMAC-signed bearer tokens against a shared secret.
///
/// Pure: the reference time is passed in, nothing is cached or mutated.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Verify `token` and return its claims.
    ///
    /// Checks, in order: structure, algorithm allow-list, signature, claims
    /// shape, expiry (`exp <= now` is expired, no leeway), claim sanity.
    #[track_caller]
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Claims> {
        let caller = Location::caller();
        let algorithm = Self::header_algorithm(token)?;

        let mut validation = Validation::new(algorithm.into());
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::TokenSignatureInvalid {
                    location: ErrorLocation::from(caller),
                },
                ErrorKind::InvalidAlgorithm => AuthError::UnsupportedAlgorithm {
                    algorithm: algorithm.as_str().to_string(),
                    location: ErrorLocation::from(caller),
                },
                _ => AuthError::TokenMalformed {
                    message: e.to_string(),
                    location: ErrorLocation::from(caller),
                },
            })?;
        let claims = token_data.claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired {
                exp: claims.exp,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }

    /// Read the advertised algorithm and reject anything outside the
    /// HMAC allow-list before any cryptography runs
    #[track_caller]
    fn header_algorithm(token: &str) -> AuthErrorResult<HmacAlgorithm> {
        let caller = Location::caller();
        let malformed = |message: &str| AuthError::TokenMalformed {
            message: message.to_string(),
            location: ErrorLocation::from(caller),
        };

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments[0].is_empty() || segments[1].is_empty() {
            return Err(malformed("expected three dot-separated segments"));
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(segments[0])
            .map_err(|_| malformed("header is not base64url"))?;
        let header: RawHeader = serde_json::from_slice(&header_bytes)
            .map_err(|_| malformed("header is not a JSON object with a string 'alg'"))?;

        HmacAlgorithm::from_header(&header.alg).ok_or_else(|| AuthError::UnsupportedAlgorithm {
            algorithm: header.alg.clone(),
            location: ErrorLocation::from(caller),
        })
    }
}
