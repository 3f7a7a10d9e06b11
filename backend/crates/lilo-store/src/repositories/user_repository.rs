use crate::{KeyedStore, MemoryStore, Result as StoreErrorResult, StoreError};

use lilo_core::User;

use std::sync::Arc;

/// Local users, uniquely keyed by external subject id
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KeyedStore<User>>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn KeyedStore<User>>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn find_by_id(&self, id: &str) -> StoreErrorResult<Option<User>> {
        match self.store.get(id) {
            Ok(user) => Ok(Some(user)),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn find_by_external_id(&self, external_id: &str) -> StoreErrorResult<Option<User>> {
        self.store.find_by_lookup_key(external_id)
    }

    /// Atomically return the user linked to `external_id`, creating it with
    /// `factory` when none exists. `true` means this call created it.
    pub fn find_or_create<F>(&self, external_id: &str, factory: F) -> StoreErrorResult<(User, bool)>
    where
        F: FnOnce() -> User,
    {
        self.store.insert_if_absent(external_id, Box::new(factory))
    }

    pub fn update_profile(&self, id: &str, name: String, picture: String) -> StoreErrorResult<User> {
        self.store.modify(
            id,
            Box::new(move |user: &mut User| {
                user.name = name;
                user.picture = picture;
            }),
        )
    }

    pub fn delete(&self, id: &str) -> StoreErrorResult<()> {
        self.store.delete(id)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
