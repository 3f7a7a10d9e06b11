use crate::{KeyedStore, NoFilter, OwnedCollection, Result as StoreErrorResult};

use lilo_core::{Feedback, Recommendation};

use std::sync::Arc;

#[derive(Clone)]
pub struct RecommendationRepository {
    recommendations: OwnedCollection<Recommendation>,
}

impl RecommendationRepository {
    pub fn new(store: Arc<dyn KeyedStore<Recommendation>>) -> Self {
        Self {
            recommendations: OwnedCollection::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            recommendations: OwnedCollection::in_memory(),
        }
    }

    pub fn create(&self, recommendation: Recommendation) -> StoreErrorResult<Recommendation> {
        self.recommendations.create(recommendation)
    }

    pub fn find_owned(&self, id: &str, user_id: &str) -> StoreErrorResult<Recommendation> {
        self.recommendations.find_owned(id, user_id)
    }

    pub fn find_by_user(&self, user_id: &str) -> StoreErrorResult<Vec<Recommendation>> {
        self.recommendations.find_by_owner(user_id, &NoFilter)
    }

    pub fn set_feedback(
        &self,
        id: &str,
        user_id: &str,
        feedback: Feedback,
    ) -> StoreErrorResult<Recommendation> {
        self.recommendations
            .modify_owned(id, user_id, |recommendation| {
                recommendation.feedback = Some(feedback)
            })
    }

    pub fn delete_all_for_user(&self, user_id: &str) -> StoreErrorResult<usize> {
        self.recommendations.delete_all_for_owner(user_id)
    }
}
