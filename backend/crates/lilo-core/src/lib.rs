pub mod entity;
pub mod error;
pub mod models;
pub mod validation;

pub use entity::Entity;
pub use error::{CoreError, Result};
pub use models::clothing_category::ClothingCategory;
pub use models::clothing_item::ClothingItem;
pub use models::feedback::Feedback;
pub use models::outfit::Outfit;
pub use models::recommendation::Recommendation;
pub use models::reflection::Reflection;
pub use models::style_profile::StyleProfile;
pub use models::user::User;
pub use models::weekly_schedule::WeeklySchedule;
pub use validation::{require_non_empty, require_rating};

/// Seasons assigned when a clothing item or outfit is saved without any
pub const ALL_SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];

/// Occasion assigned when an outfit is saved without any
pub const DEFAULT_OCCASION: &str = "casual";

#[cfg(test)]
mod tests;
