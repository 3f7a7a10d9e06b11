use crate::{KeyedStore, MemoryStore, Result as StoreErrorResult, StoreError};

use lilo_core::StyleProfile;

use std::sync::Arc;

/// Style profiles, keyed by owning user (at most one each)
#[derive(Clone)]
pub struct StyleProfileRepository {
    store: Arc<dyn KeyedStore<StyleProfile>>,
}

impl StyleProfileRepository {
    pub fn new(store: Arc<dyn KeyedStore<StyleProfile>>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn find_by_user(&self, user_id: &str) -> StoreErrorResult<Option<StyleProfile>> {
        self.store.find_by_lookup_key(user_id)
    }

    /// Create the user's profile or replace the existing one's preferences
    pub fn save(&self, profile: StyleProfile) -> StoreErrorResult<StyleProfile> {
        let user_id = profile.user_id.clone();
        let candidate = profile.clone();

        let (existing, created) = self
            .store
            .insert_if_absent(&user_id, Box::new(move || candidate))?;
        if created {
            return Ok(existing);
        }

        self.store.modify(
            &existing.id,
            Box::new(move |stored: &mut StyleProfile| {
                stored.preferred_styles = profile.preferred_styles;
                stored.weekly_schedule = profile.weekly_schedule;
                stored.seasonal_preferences = profile.seasonal_preferences;
                stored.color_preferences = profile.color_preferences;
            }),
        )
    }

    pub fn delete_for_user(&self, user_id: &str) -> StoreErrorResult<bool> {
        let Some(profile) = self.store.find_by_lookup_key(user_id)? else {
            return Ok(false);
        };

        match self.store.delete(&profile.id) {
            Ok(()) => Ok(true),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
