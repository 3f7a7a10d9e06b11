use serde::Deserialize;

/// Partial update; omitted fields keep their current value
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOutfitRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub items: Option<Vec<String>>,
    pub occasion: Option<Vec<String>>,
    pub season: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_favorite: Option<bool>,
}
