pub mod clothing_category;
pub mod clothing_item;
pub mod feedback;
pub mod outfit;
pub mod recommendation;
pub mod reflection;
pub mod style_profile;
pub mod user;
pub mod weekly_schedule;
