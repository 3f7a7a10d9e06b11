use crate::{KeyedStore, OutfitFilter, OwnedCollection, Result as StoreErrorResult, StoreError};

use lilo_core::Outfit;

use std::sync::Arc;

#[derive(Clone)]
pub struct OutfitRepository {
    outfits: OwnedCollection<Outfit>,
}

impl OutfitRepository {
    pub fn new(store: Arc<dyn KeyedStore<Outfit>>) -> Self {
        Self {
            outfits: OwnedCollection::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            outfits: OwnedCollection::in_memory(),
        }
    }

    pub fn create(&self, outfit: Outfit) -> StoreErrorResult<Outfit> {
        self.outfits.create(outfit)
    }

    pub fn find_owned(&self, id: &str, user_id: &str) -> StoreErrorResult<Outfit> {
        self.outfits.find_owned(id, user_id)
    }

    pub fn find_by_user(&self, user_id: &str, filter: &OutfitFilter) -> StoreErrorResult<Vec<Outfit>> {
        self.outfits.find_by_owner(user_id, filter)
    }

    pub fn update<F, E>(&self, id: &str, user_id: &str, edit: F) -> Result<Outfit, E>
    where
        F: FnOnce(&mut Outfit) -> Result<(), E>,
        E: From<StoreError>,
    {
        self.outfits.try_modify_owned(id, user_id, edit)
    }

    pub fn set_favorite(&self, id: &str, user_id: &str, favorite: bool) -> StoreErrorResult<Outfit> {
        self.outfits
            .modify_owned(id, user_id, |outfit| outfit.is_favorite = favorite)
    }

    pub fn mark_recommended(&self, id: &str, user_id: &str) -> StoreErrorResult<Outfit> {
        self.outfits
            .modify_owned(id, user_id, |outfit| outfit.is_recommended = true)
    }

    pub fn delete(&self, id: &str, user_id: &str) -> StoreErrorResult<()> {
        self.outfits.delete_owned(id, user_id)
    }

    pub fn delete_all_for_user(&self, user_id: &str) -> StoreErrorResult<usize> {
        self.outfits.delete_all_for_owner(user_id)
    }
}
