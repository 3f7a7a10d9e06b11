use lilo_store::StoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    TokenMalformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported token algorithm '{algorithm}' {location}")]
    UnsupportedAlgorithm {
        algorithm: String,
        location: ErrorLocation,
    },

    #[error("Token signature does not verify {location}")]
    TokenSignatureInvalid { location: ErrorLocation },

    #[error("Token expired at {exp} {location}")]
    TokenExpired { exp: i64, location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing authorization header {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Invalid authorization header: expected 'Bearer <token>' {location}")]
    InvalidCredentialFormat { location: ErrorLocation },

    #[error("Failed to resolve identity: {source} {location}")]
    IdentityResolution {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenMalformed { .. } => "TOKEN_MALFORMED",
            Self::UnsupportedAlgorithm { .. } => "UNSUPPORTED_ALGORITHM",
            Self::TokenSignatureInvalid { .. } => "TOKEN_SIGNATURE_INVALID",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::MissingCredential { .. } => "MISSING_CREDENTIAL",
            Self::InvalidCredentialFormat { .. } => "INVALID_CREDENTIAL_FORMAT",
            Self::IdentityResolution { .. } => "IDENTITY_RESOLUTION_FAILED",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }

    /// Message safe to return to the caller; never echoes token contents
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::TokenMalformed { .. } => "Malformed token",
            Self::UnsupportedAlgorithm { .. } => "Unsupported token algorithm",
            Self::TokenSignatureInvalid { .. } => "Invalid token signature",
            Self::TokenExpired { .. } => "Token expired",
            Self::InvalidClaim { .. } => "Invalid token claim",
            Self::MissingCredential { .. } => "Authorization header required",
            Self::InvalidCredentialFormat { .. } => "Authorization header must be 'Bearer <token>'",
            Self::IdentityResolution { .. } => "Unable to resolve user identity",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
