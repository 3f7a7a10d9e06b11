use crate::{KeyedStore, NoFilter, OwnedCollection, Result as StoreErrorResult};

use lilo_core::Reflection;

use std::sync::Arc;

#[derive(Clone)]
pub struct ReflectionRepository {
    reflections: OwnedCollection<Reflection>,
}

impl ReflectionRepository {
    pub fn new(store: Arc<dyn KeyedStore<Reflection>>) -> Self {
        Self {
            reflections: OwnedCollection::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            reflections: OwnedCollection::in_memory(),
        }
    }

    pub fn create(&self, reflection: Reflection) -> StoreErrorResult<Reflection> {
        self.reflections.create(reflection)
    }

    pub fn find_by_user(&self, user_id: &str) -> StoreErrorResult<Vec<Reflection>> {
        self.reflections.find_by_owner(user_id, &NoFilter)
    }

    pub fn delete_all_for_user(&self, user_id: &str) -> StoreErrorResult<usize> {
        self.reflections.delete_all_for_owner(user_id)
    }
}
