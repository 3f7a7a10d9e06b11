use serde::Deserialize;

/// Partial update; omitted fields keep their current value
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateClothingItemRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub color: Option<String>,
    pub season: Option<Vec<String>>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub is_owned: Option<bool>,
}
