pub mod update_profile_request;
pub mod user_dto;
pub mod users;
