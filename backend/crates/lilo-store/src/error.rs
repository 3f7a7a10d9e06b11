use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Lookup key already in use: {key} {location}")]
    DuplicateKey {
        key: String,
        location: ErrorLocation,
    },

    /// Raised by repositories, never by the store itself
    #[error("Entity {id} is not owned by user {owner} {location}")]
    OwnershipMismatch {
        id: String,
        owner: String,
        location: ErrorLocation,
    },

    #[error("Invalid entity: {message} {location}")]
    InvalidEntity {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// True for lookups that should surface as "not found" to a client,
    /// including entities that exist but belong to someone else
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::OwnershipMismatch { .. }
        )
    }
}

pub type Result<T> = StdResult<T, StoreError>;
