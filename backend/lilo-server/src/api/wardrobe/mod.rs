pub mod clothing_item_dto;
pub mod create_clothing_item_request;
pub mod list_clothing_items_query;
pub mod update_clothing_item_request;
pub mod wardrobe;
