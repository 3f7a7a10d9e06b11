pub mod save_style_profile_request;
pub mod style_profile_dto;
pub mod style_profiles;
