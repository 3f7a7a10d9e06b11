//! Current-user handlers

use crate::{
    ApiResult, AppState, CurrentUser, Envelope, MessageResponse, UpdateProfileRequest, UserDto,
};

use axum::{Json, extract::State};
use log::info;

/// GET /api/auth/user
pub async fn get_current_user(
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Envelope<UserDto>>> {
    Ok(Json(Envelope::data(user.into())))
}

/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<Envelope<UserDto>>> {
    let name = req.name.map(|n| n.trim().to_string()).unwrap_or(user.name);
    let picture = req.picture.unwrap_or(user.picture);

    let updated = state.users.update_profile(&user.id, name, picture)?;

    Ok(Json(Envelope::with_message(
        updated.into(),
        "Profile updated successfully",
    )))
}

/// DELETE /api/users/account
///
/// Removes the user and everything they own. A later request carrying a
/// valid token for the same subject provisions a fresh, empty account.
///
/// The user record goes first so no new request can resolve to this id;
/// the sweep then catches anything written by requests already in flight.
pub async fn delete_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<MessageResponse>> {
    state.users.delete(&user.id)?;

    let items = state.clothing_items.delete_all_for_user(&user.id)?;
    let outfits = state.outfits.delete_all_for_user(&user.id)?;
    let reflections = state.reflections.delete_all_for_user(&user.id)?;
    let recommendations = state.recommendations.delete_all_for_user(&user.id)?;
    state.style_profiles.delete_for_user(&user.id)?;

    info!(
        "Deleted account {} ({} items, {} outfits, {} reflections, {} recommendations)",
        user.id, items, outfits, reflections, recommendations
    );

    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
