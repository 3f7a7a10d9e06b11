use crate::{Criteria, KeyedStore, MemoryStore, NoFilter, Result as StoreErrorResult, StoreError};

use lilo_core::Entity;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Operations shared by every collection whose entities belong to one user.
///
/// Ownership is checked here, above the store: the store never knows who is
/// asking.
pub struct OwnedCollection<T: Entity> {
    store: Arc<dyn KeyedStore<T>>,
}

impl<T: Entity> Clone for OwnedCollection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> OwnedCollection<T> {
    pub fn new(store: Arc<dyn KeyedStore<T>>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Store a new entity and return it with its assigned id and timestamps
    pub fn create(&self, entity: T) -> StoreErrorResult<T> {
        let id = self.store.put(entity)?;
        self.store.get(&id)
    }

    /// Fetch an entity and require that `owner` owns it
    #[track_caller]
    pub fn find_owned(&self, id: &str, owner: &str) -> StoreErrorResult<T> {
        let entity = self.store.get(id)?;

        if entity.owner_id() != Some(owner) {
            return Err(StoreError::OwnershipMismatch {
                id: id.to_string(),
                owner: owner.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(entity)
    }

    pub fn find_by_owner(&self, owner: &str, criteria: &dyn Criteria<T>) -> StoreErrorResult<Vec<T>> {
        self.store.list(Some(owner), criteria)
    }

    /// Apply `mutation` to an entity the caller owns. Owners never change,
    /// so the ownership check and the write need not share a lock.
    #[track_caller]
    pub fn modify_owned<F>(&self, id: &str, owner: &str, mutation: F) -> StoreErrorResult<T>
    where
        F: FnOnce(&mut T),
    {
        self.find_owned(id, owner)?;
        self.store.modify(id, Box::new(mutation))
    }

    /// Edit an entity the caller owns with a step that may refuse the
    /// result. `edit` runs against the stored value under the write lock, so
    /// it never overwrites fields changed since the caller last read them.
    /// A refused edit writes nothing and its error is returned as is.
    #[track_caller]
    pub fn try_modify_owned<F, E>(&self, id: &str, owner: &str, edit: F) -> Result<T, E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
        E: From<StoreError>,
    {
        self.find_owned(id, owner)?;

        let caller = Location::caller();
        let mut refusal = None;
        let outcome = self.store.try_modify(
            id,
            Box::new(|value| {
                edit(value).map_err(|e| {
                    refusal = Some(e);
                    StoreError::InvalidEntity {
                        message: format!("edit of {id} refused"),
                        location: ErrorLocation::from(caller),
                    }
                })
            }),
        );

        match (outcome, refusal) {
            (_, Some(e)) => Err(e),
            (Ok(entity), None) => Ok(entity),
            (Err(e), None) => Err(e.into()),
        }
    }

    #[track_caller]
    pub fn delete_owned(&self, id: &str, owner: &str) -> StoreErrorResult<()> {
        self.find_owned(id, owner)?;
        self.store.delete(id)
    }

    /// Remove everything `owner` owns, returning how many entities went
    pub fn delete_all_for_owner(&self, owner: &str) -> StoreErrorResult<usize> {
        let mut removed = 0;
        for entity in self.store.list(Some(owner), &NoFilter)? {
            match self.store.delete(entity.id()) {
                Ok(()) => removed += 1,
                Err(StoreError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }
}
