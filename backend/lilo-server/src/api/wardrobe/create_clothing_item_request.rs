use serde::Deserialize;

/// Missing required fields deserialize as empty and fail validation with
/// a field-specific message
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateClothingItemRequest {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub color: String,
    /// Defaults to all four seasons when empty
    pub season: Vec<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_urls: Vec<String>,
    /// Defaults to `true`; `false` puts the item on the wishlist
    pub is_owned: Option<bool>,
}
