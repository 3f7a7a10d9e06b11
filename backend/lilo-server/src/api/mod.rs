pub mod envelope;
pub mod error;
pub mod extractors;
pub mod outfits;
pub mod query;
pub mod recommendations;
pub mod reflections;
pub mod style_profiles;
pub mod users;
pub mod wardrobe;
