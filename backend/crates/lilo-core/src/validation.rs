use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Reject an empty or whitespace-only required field
#[track_caller]
pub fn require_non_empty(value: &str, field: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Reject a rating outside the inclusive 1-5 scale
#[track_caller]
pub fn require_rating(value: u8, field: &str) -> CoreErrorResult<()> {
    if !(1..=5).contains(&value) {
        return Err(CoreError::Validation {
            message: format!("{} must be between 1 and 5, got {}", field, value),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
