pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    envelope::{Envelope, MessageResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    outfits::{
        create_outfit_request::CreateOutfitRequest,
        list_outfits_query::ListOutfitsQuery,
        outfit_dto::OutfitDto,
        outfits::{
            create_outfit, delete_outfit, favorite_outfit, get_outfit, list_outfits,
            unfavorite_outfit, update_outfit,
        },
        update_outfit_request::UpdateOutfitRequest,
    },
    recommendations::{
        daily_recommendation_dto::DailyRecommendationDto,
        feedback_request::FeedbackRequest,
        recommendation_dto::RecommendationDto,
        recommendations::{
            DAILY_RECOMMENDATION_COUNT, daily_recommendations, explore_recommendations,
            list_recommendations, pick_daily, record_daily_picks, submit_feedback,
        },
    },
    reflections::{
        create_reflection_request::CreateReflectionRequest,
        reflection_dto::ReflectionDto,
        reflections::{create_reflection, list_reflections},
    },
    style_profiles::{
        save_style_profile_request::SaveStyleProfileRequest,
        style_profile_dto::StyleProfileDto,
        style_profiles::{get_style_profile, save_style_profile},
    },
    users::{
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        users::{delete_account, get_current_user, update_profile},
    },
    wardrobe::{
        clothing_item_dto::ClothingItemDto,
        create_clothing_item_request::CreateClothingItemRequest,
        list_clothing_items_query::ListClothingItemsQuery,
        update_clothing_item_request::UpdateClothingItemRequest,
        wardrobe::{
            create_clothing_item, delete_clothing_item, get_clothing_item, list_categories,
            list_clothing_items, update_clothing_item,
        },
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
