use crate::{ALL_SEASONS, Entity, Result as CoreErrorResult, require_non_empty};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: String,
    pub user_id: String,

    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub color: String,
    pub season: Vec<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_urls: Vec<String>,
    /// `false` means the item is on the wishlist
    pub is_owned: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClothingItem {
    pub fn new(user_id: String, name: String, category: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id,
            name,
            category,
            subcategory: String::new(),
            color,
            season: Vec::new(),
            brand: None,
            size: None,
            image_urls: Vec::new(),
            is_owned: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check required fields and fill in defaults for empty collections
    #[track_caller]
    pub fn validate(&mut self) -> CoreErrorResult<()> {
        require_non_empty(&self.name, "name")?;
        require_non_empty(&self.category, "category")?;
        require_non_empty(&self.color, "color")?;

        if self.season.is_empty() {
            self.season = ALL_SEASONS.iter().map(|s| s.to_string()).collect();
        }

        Ok(())
    }
}

impl Entity for ClothingItem {
    crate::impl_entity_fields!();

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
