use crate::Criteria;
use crate::criteria::{contains_or_any, eq_or_any};

use lilo_core::ClothingItem;

/// Wardrobe filter; every `None` field is unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClothingItemFilter {
    pub category: Option<String>,
    pub color: Option<String>,
    /// Item must list this season
    pub season: Option<String>,
    pub is_owned: Option<bool>,
}

impl ClothingItemFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Criteria<ClothingItem> for ClothingItemFilter {
    fn matches(&self, item: &ClothingItem) -> bool {
        eq_or_any(self.category.as_deref(), item.category.as_str())
            && eq_or_any(self.color.as_deref(), item.color.as_str())
            && contains_or_any(self.season.as_deref(), &item.season)
            && eq_or_any(self.is_owned.as_ref(), &item.is_owned)
    }
}
