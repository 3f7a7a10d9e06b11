pub mod clothing_item_repository;
pub mod outfit_repository;
pub mod owned_collection;
pub mod recommendation_repository;
pub mod reflection_repository;
pub mod style_profile_repository;
pub mod user_repository;
