use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const MAX_SUBJECT_LEN: usize = 255;

/// Claims issued by the external identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// External subject id
    pub sub: String,
    /// Required; a token without it does not decode
    pub email: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-form profile data; `name` and `avatar_url` are read when present
    #[serde(default, alias = "metadata")]
    pub user_metadata: Map<String, Value>,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LEN {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// A string metadata value; anything else counts as absent
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.user_metadata.get(key).and_then(Value::as_str)
    }

    pub fn display_name(&self) -> &str {
        self.metadata_str("name").unwrap_or_default()
    }

    pub fn avatar_url(&self) -> &str {
        self.metadata_str("avatar_url").unwrap_or_default()
    }
}
