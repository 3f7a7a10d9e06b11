use crate::api::query::{InvalidFlag, non_empty, parse_flag};

use lilo_store::ClothingItemFilter;

use serde::Deserialize;

/// Query parameters for listing wardrobe items
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClothingItemsQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    /// Item must list this season
    pub season: Option<String>,
    /// Kept as text so a malformed flag empties the result instead of
    /// rejecting the request
    pub is_owned: Option<String>,
}

impl ListClothingItemsQuery {
    pub fn into_filter(self) -> Result<ClothingItemFilter, InvalidFlag> {
        Ok(ClothingItemFilter {
            is_owned: parse_flag(self.is_owned.as_deref())?,
            category: non_empty(self.category),
            color: non_empty(self.color),
            season: non_empty(self.season),
        })
    }
}
