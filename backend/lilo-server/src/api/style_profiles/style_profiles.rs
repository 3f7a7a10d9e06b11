//! Style profile handlers (one profile per user)

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, Envelope, SaveStyleProfileRequest, StyleProfileDto,
};

use lilo_core::StyleProfile;

use axum::{Json, extract::State};

/// GET /api/users/style-profile
pub async fn get_style_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Envelope<StyleProfileDto>>> {
    let profile = state
        .style_profiles
        .find_by_user(&user.id)?
        .ok_or_else(|| ApiError::not_found("Style profile not found"))?;

    Ok(Json(Envelope::data(profile.into())))
}

/// PUT /api/users/style-profile
///
/// Creates the profile on first save, replaces its preferences afterwards
pub async fn save_style_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<SaveStyleProfileRequest>,
) -> ApiResult<Json<Envelope<StyleProfileDto>>> {
    let mut profile = StyleProfile::new(user.id);
    profile.preferred_styles = req.preferred_styles;
    profile.weekly_schedule = req.weekly_schedule;
    profile.seasonal_preferences = req.seasonal_preferences;
    profile.color_preferences = req.color_preferences;

    let saved = state.style_profiles.save(profile)?;

    Ok(Json(Envelope::with_message(
        saved.into(),
        "Style profile updated successfully",
    )))
}
