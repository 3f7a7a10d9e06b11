pub mod clothing_item_filter;
pub mod outfit_filter;
