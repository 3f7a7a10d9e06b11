use crate::{Criteria, Result as StoreErrorResult};

use lilo_core::Entity;

/// Builds the value to insert when `insert_if_absent` misses
pub type Factory<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// In-place edit applied by `modify` while the entry is locked
pub type Mutation<'a, T> = Box<dyn FnOnce(&mut T) + 'a>;

/// Edit applied by `try_modify`. Returning `Err` discards the edit.
pub type TryMutation<'a, T> = Box<dyn FnOnce(&mut T) -> StoreErrorResult<()> + 'a>;

/// Storage contract shared by every entity collection.
///
/// Implementations must make each call atomic on its own; nothing spans two
/// calls. Callers that need check-then-insert semantics use
/// [`KeyedStore::insert_if_absent`].
pub trait KeyedStore<T: Entity>: Send + Sync {
    /// Insert or overwrite. An empty id gets a fresh one; `created_at` is
    /// stamped on first insert and kept on overwrite, `updated_at` always.
    fn put(&self, value: T) -> StoreErrorResult<String>;

    #[track_caller]
    fn get(&self, id: &str) -> StoreErrorResult<T>;

    #[track_caller]
    fn delete(&self, id: &str) -> StoreErrorResult<()>;

    /// All entries owned by `owner` (any owner when `None`) that satisfy
    /// `criteria`. Order is unspecified.
    fn list(&self, owner: Option<&str>, criteria: &dyn Criteria<T>) -> StoreErrorResult<Vec<T>>;

    /// Return the entry holding `lookup_key`, or build one with `factory`
    /// and insert it. The boolean is `true` when the factory ran.
    #[track_caller]
    fn insert_if_absent(
        &self,
        lookup_key: &str,
        factory: Factory<'_, T>,
    ) -> StoreErrorResult<(T, bool)>;

    fn find_by_lookup_key(&self, lookup_key: &str) -> StoreErrorResult<Option<T>>;

    /// Apply `mutation` to an existing entry under one critical section.
    /// The id and `created_at` cannot be changed this way.
    #[track_caller]
    fn modify(&self, id: &str, mutation: Mutation<'_, T>) -> StoreErrorResult<T> {
        self.try_modify(
            id,
            Box::new(move |value| {
                mutation(value);
                Ok(())
            }),
        )
    }

    /// Like [`KeyedStore::modify`], but the edit runs on a copy of the entry
    /// that only replaces it when the edit returns `Ok`.
    #[track_caller]
    fn try_modify(&self, id: &str, mutation: TryMutation<'_, T>) -> StoreErrorResult<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
