pub mod create_outfit_request;
pub mod list_outfits_query;
pub mod outfit_dto;
pub mod outfits;
pub mod update_outfit_request;
