pub mod criteria;
pub mod error;
pub mod filters;
pub mod keyed_store;
pub mod memory_store;
pub mod repositories;

pub use criteria::{Criteria, NoFilter};
pub use error::{Result, StoreError};
pub use filters::clothing_item_filter::ClothingItemFilter;
pub use filters::outfit_filter::OutfitFilter;
pub use keyed_store::{Factory, KeyedStore, Mutation, TryMutation};
pub use memory_store::MemoryStore;
pub use repositories::clothing_item_repository::ClothingItemRepository;
pub use repositories::outfit_repository::OutfitRepository;
pub use repositories::owned_collection::OwnedCollection;
pub use repositories::recommendation_repository::RecommendationRepository;
pub use repositories::reflection_repository::ReflectionRepository;
pub use repositories::style_profile_repository::StyleProfileRepository;
pub use repositories::user_repository::UserRepository;
