use crate::Criteria;
use crate::criteria::{contains_or_any, eq_or_any};

use lilo_core::Outfit;

/// Outfit filter; every `None` field is unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitFilter {
    /// Outfit must list this occasion
    pub occasion: Option<String>,
    /// Outfit must list this season
    pub season: Option<String>,
    pub is_favorite: Option<bool>,
    pub is_recommended: Option<bool>,
}

impl OutfitFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Criteria<Outfit> for OutfitFilter {
    fn matches(&self, outfit: &Outfit) -> bool {
        contains_or_any(self.occasion.as_deref(), &outfit.occasion)
            && contains_or_any(self.season.as_deref(), &outfit.season)
            && eq_or_any(self.is_favorite.as_ref(), &outfit.is_favorite)
            && eq_or_any(self.is_recommended.as_ref(), &outfit.is_recommended)
    }
}
