use lilo_core::Outfit;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Clothing item ids
    pub items: Vec<String>,
    pub occasion: Vec<String>,
    pub season: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_recommended: bool,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Outfit> for OutfitDto {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id,
            user_id: outfit.user_id,
            name: outfit.name,
            description: outfit.description,
            items: outfit.items,
            occasion: outfit.occasion,
            season: outfit.season,
            image_url: outfit.image_url,
            is_recommended: outfit.is_recommended,
            is_favorite: outfit.is_favorite,
            created_at: outfit.created_at,
            updated_at: outfit.updated_at,
        }
    }
}
