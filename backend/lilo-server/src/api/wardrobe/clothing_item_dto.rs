use lilo_core::ClothingItem;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subcategory: String,
    pub color: String,
    pub season: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub image_urls: Vec<String>,
    pub is_owned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClothingItem> for ClothingItemDto {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            name: item.name,
            category: item.category,
            subcategory: item.subcategory,
            color: item.color,
            season: item.season,
            brand: item.brand,
            size: item.size,
            image_urls: item.image_urls,
            is_owned: item.is_owned,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
