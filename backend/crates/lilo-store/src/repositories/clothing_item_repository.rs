use crate::{ClothingItemFilter, KeyedStore, OwnedCollection, Result as StoreErrorResult, StoreError};

use lilo_core::{ClothingCategory, ClothingItem};

use std::sync::Arc;

/// Wardrobe items, scoped to their owner
#[derive(Clone)]
pub struct ClothingItemRepository {
    items: OwnedCollection<ClothingItem>,
}

impl ClothingItemRepository {
    pub fn new(store: Arc<dyn KeyedStore<ClothingItem>>) -> Self {
        Self {
            items: OwnedCollection::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            items: OwnedCollection::in_memory(),
        }
    }

    pub fn create(&self, item: ClothingItem) -> StoreErrorResult<ClothingItem> {
        self.items.create(item)
    }

    pub fn find_owned(&self, id: &str, user_id: &str) -> StoreErrorResult<ClothingItem> {
        self.items.find_owned(id, user_id)
    }

    pub fn find_by_user(
        &self,
        user_id: &str,
        filter: &ClothingItemFilter,
    ) -> StoreErrorResult<Vec<ClothingItem>> {
        self.items.find_by_owner(user_id, filter)
    }

    /// Apply `edit` to the stored item. An `Err` from `edit` leaves it as it was.
    pub fn update<F, E>(&self, id: &str, user_id: &str, edit: F) -> Result<ClothingItem, E>
    where
        F: FnOnce(&mut ClothingItem) -> Result<(), E>,
        E: From<StoreError>,
    {
        self.items.try_modify_owned(id, user_id, edit)
    }

    pub fn delete(&self, id: &str, user_id: &str) -> StoreErrorResult<()> {
        self.items.delete_owned(id, user_id)
    }

    pub fn delete_all_for_user(&self, user_id: &str) -> StoreErrorResult<usize> {
        self.items.delete_all_for_owner(user_id)
    }

    pub fn categories(&self) -> Vec<ClothingCategory> {
        ClothingCategory::defaults()
    }
}
