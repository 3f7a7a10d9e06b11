//! In-memory [`KeyedStore`] backed by a `HashMap` behind a
//! [`parking_lot::RwLock`]. Reads share the lock, writes take it exclusively.
//! Data lives for the lifetime of the process only.

use crate::{Criteria, Factory, KeyedStore, Result as StoreErrorResult, StoreError, TryMutation};

use lilo_core::Entity;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use parking_lot::RwLock;
use uuid::Uuid;

/// Thread-safe keyed store. Clones share the same data.
pub struct MemoryStore<T: Entity> {
    inner: Arc<RwLock<StoreInner<T>>>,
}

struct StoreInner<T> {
    entries: HashMap<String, T>,
    /// lookup key -> entity id
    index: HashMap<String, String>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                entries: HashMap::new(),
                index: HashMap::new(),
            })),
        }
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Entity> StoreInner<T> {
    /// Write `value` under its id, keeping the lookup index consistent.
    /// Caller must already have assigned the id and timestamps.
    #[track_caller]
    fn store_entry(&mut self, value: T) -> StoreErrorResult<T> {
        let id = value.id().to_string();

        if let Some(key) = value.lookup_key()
            && let Some(holder) = self.index.get(key)
            && holder != &id
        {
            return Err(StoreError::DuplicateKey {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(previous) = self.entries.get(&id)
            && let Some(old_key) = previous.lookup_key()
            && Some(old_key) != value.lookup_key()
        {
            self.index.remove(old_key);
        }

        if let Some(key) = value.lookup_key() {
            self.index.insert(key.to_string(), id.clone());
        }

        self.entries.insert(id, value.clone());
        Ok(value)
    }
}

impl<T: Entity> KeyedStore<T> for MemoryStore<T> {
    fn put(&self, mut value: T) -> StoreErrorResult<String> {
        let now = Utc::now();
        let mut inner = self.inner.write();

        if value.id().is_empty() {
            value.set_id(Uuid::new_v4().to_string());
        }

        let created_at = inner
            .entries
            .get(value.id())
            .map(|existing| existing.created_at())
            .unwrap_or(now);
        value.set_created_at(created_at);
        value.set_updated_at(now);

        let stored = inner.store_entry(value)?;
        Ok(stored.id().to_string())
    }

    #[track_caller]
    fn get(&self, id: &str) -> StoreErrorResult<T> {
        let caller = Location::caller();
        self.inner
            .read()
            .entries
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
                location: ErrorLocation::from(caller),
            })
    }

    #[track_caller]
    fn delete(&self, id: &str) -> StoreErrorResult<()> {
        let caller = Location::caller();
        let mut inner = self.inner.write();

        let removed = inner.entries.remove(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(caller),
        })?;

        if let Some(key) = removed.lookup_key() {
            inner.index.remove(key);
        }

        Ok(())
    }

    fn list(&self, owner: Option<&str>, criteria: &dyn Criteria<T>) -> StoreErrorResult<Vec<T>> {
        let inner = self.inner.read();

        Ok(inner
            .entries
            .values()
            .filter(|entity| owner.is_none_or(|o| entity.owner_id() == Some(o)))
            .filter(|entity| criteria.matches(entity))
            .cloned()
            .collect())
    }

    #[track_caller]
    fn insert_if_absent(
        &self,
        lookup_key: &str,
        factory: Factory<'_, T>,
    ) -> StoreErrorResult<(T, bool)> {
        let mut inner = self.inner.write();

        if let Some(existing) = inner
            .index
            .get(lookup_key)
            .and_then(|id| inner.entries.get(id))
        {
            return Ok((existing.clone(), false));
        }

        let mut value = factory();
        if value.lookup_key() != Some(lookup_key) {
            return Err(StoreError::InvalidEntity {
                message: format!(
                    "factory produced an entity keyed {:?}, expected {:?}",
                    value.lookup_key(),
                    lookup_key
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now();
        if value.id().is_empty() {
            value.set_id(Uuid::new_v4().to_string());
        }
        value.set_created_at(now);
        value.set_updated_at(now);

        let stored = inner.store_entry(value)?;
        Ok((stored, true))
    }

    fn find_by_lookup_key(&self, lookup_key: &str) -> StoreErrorResult<Option<T>> {
        let inner = self.inner.read();

        Ok(inner
            .index
            .get(lookup_key)
            .and_then(|id| inner.entries.get(id))
            .cloned())
    }

    #[track_caller]
    fn try_modify(&self, id: &str, mutation: TryMutation<'_, T>) -> StoreErrorResult<T> {
        let caller = Location::caller();
        let mut inner = self.inner.write();

        let mut value = inner
            .entries
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
                location: ErrorLocation::from(caller),
            })?;
        let created_at = value.created_at();

        mutation(&mut value)?;

        value.set_id(id.to_string());
        value.set_created_at(created_at);
        value.set_updated_at(Utc::now());

        inner.store_entry(value)
    }

    fn len(&self) -> usize {
        self.inner.read().entries.len()
    }
}
