pub mod daily_recommendation_dto;
pub mod feedback_request;
pub mod recommendation_dto;
pub mod recommendations;
