use crate::api::query::{InvalidFlag, non_empty, parse_flag};

use lilo_store::OutfitFilter;

use serde::Deserialize;

/// Query parameters for listing or exploring outfits
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutfitsQuery {
    /// Outfit must list this occasion
    pub occasion: Option<String>,
    /// Outfit must list this season
    pub season: Option<String>,
    pub is_favorite: Option<String>,
    pub is_recommended: Option<String>,
}

impl ListOutfitsQuery {
    pub fn into_filter(self) -> Result<OutfitFilter, InvalidFlag> {
        Ok(OutfitFilter {
            is_favorite: parse_flag(self.is_favorite.as_deref())?,
            is_recommended: parse_flag(self.is_recommended.as_deref())?,
            occasion: non_empty(self.occasion),
            season: non_empty(self.season),
        })
    }
}
