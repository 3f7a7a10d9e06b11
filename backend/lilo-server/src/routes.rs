use crate::{
    AppState, api, create_clothing_item, create_outfit, create_reflection,
    daily_recommendations, delete_account, delete_clothing_item, delete_outfit,
    explore_recommendations, favorite_outfit, get_clothing_item, get_current_user, get_outfit,
    get_style_profile, health, list_categories, list_clothing_items, list_outfits,
    list_recommendations, list_reflections, request_logging, save_style_profile,
    submit_feedback, unfavorite_outfit, update_clothing_item, update_outfit, update_profile,
};

use lilo_config::ServerConfig;

use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        // Health check endpoints (unauthenticated)
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Users
        .route("/api/auth/user", get(get_current_user))
        .route("/api/users/profile", put(update_profile))
        .route("/api/users/account", delete(delete_account))
        .route(
            "/api/users/style-profile",
            get(get_style_profile).put(save_style_profile),
        )
        // Wardrobe
        .route(
            "/api/wardrobe/items",
            get(list_clothing_items).post(create_clothing_item),
        )
        .route(
            "/api/wardrobe/items/{id}",
            get(get_clothing_item)
                .put(update_clothing_item)
                .delete(delete_clothing_item),
        )
        .route("/api/wardrobe/categories", get(list_categories))
        // Outfits
        .route("/api/outfits", get(list_outfits).post(create_outfit))
        .route(
            "/api/outfits/{id}",
            get(get_outfit).put(update_outfit).delete(delete_outfit),
        )
        .route(
            "/api/outfits/{id}/favorite",
            post(favorite_outfit).delete(unfavorite_outfit),
        )
        // Reflections
        .route(
            "/api/reflections",
            get(list_reflections).post(create_reflection),
        )
        // Recommendations
        .route("/api/recommendations", get(list_recommendations))
        .route("/api/recommendations/daily", get(daily_recommendations))
        .route("/api/recommendations/explore", get(explore_recommendations))
        .route("/api/recommendations/feedback", post(submit_feedback))
        // Add shared state
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs,
                ))),
        )
        .layer(middleware::from_fn(request_logging::log_requests))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}

/// An empty origin list allows any origin
fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<http::HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

async fn handle_timeout(err: BoxError) -> impl IntoResponse {
    let (status, code, message) = if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "REQUEST_TIMEOUT",
            "Request took too long".to_string(),
        )
    } else {
        log::error!("Unhandled middleware error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error".to_string(),
        )
    };

    (
        status,
        Json(api::error::ApiErrorResponse {
            error: api::error::ApiErrorBody {
                code: code.to_string(),
                message,
                field: None,
            },
        }),
    )
}
