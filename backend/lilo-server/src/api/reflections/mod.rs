pub mod create_reflection_request;
pub mod reflection_dto;
pub mod reflections;
