use crate::{
    ALL_SEASONS, CoreError, DEFAULT_OCCASION, Entity, Result as CoreErrorResult, require_non_empty,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A named combination of clothing items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub user_id: String,

    pub name: String,
    pub description: Option<String>,
    /// Clothing item ids
    pub items: Vec<String>,
    pub occasion: Vec<String>,
    pub season: Vec<String>,
    pub image_url: Option<String>,
    pub is_recommended: bool,
    pub is_favorite: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Outfit {
    pub fn new(user_id: String, name: String, items: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id,
            name,
            description: None,
            items,
            occasion: Vec::new(),
            season: Vec::new(),
            image_url: None,
            is_recommended: false,
            is_favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check required fields and fill in defaults for empty collections
    #[track_caller]
    pub fn validate(&mut self) -> CoreErrorResult<()> {
        require_non_empty(&self.name, "name")?;

        if self.items.is_empty() {
            return Err(CoreError::Validation {
                message: "outfit must contain at least one item".to_string(),
                field: Some("items".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.occasion.is_empty() {
            self.occasion = vec![DEFAULT_OCCASION.to_string()];
        }
        if self.season.is_empty() {
            self.season = ALL_SEASONS.iter().map(|s| s.to_string()).collect();
        }

        Ok(())
    }
}

impl Entity for Outfit {
    crate::impl_entity_fields!();

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
