//! Integration tests for profile, style profile and account handlers
mod common;

use crate::common::{
    bearer_for, create_item, create_outfit, create_test_app, create_test_app_state, send, shirt,
};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_update_profile_changes_only_given_fields() {
    let app = create_test_app(create_test_app_state());
    let header = bearer_for("ext-1");

    let (status, json) = send(
        &app,
        "PUT",
        "/api/users/profile",
        Some(&header),
        Some(json!({ "name": "Ada Lovelace" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert_eq!(json["data"]["picture"], "https://img.example/ext-1.png");

    let (_, current) = send(&app, "GET", "/api/auth/user", Some(&header), None).await;
    assert_eq!(current["data"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_style_profile_missing_returns_404() {
    let app = create_test_app(create_test_app_state());

    let (status, json) = send(
        &app,
        "GET",
        "/api/users/style-profile",
        Some(&bearer_for("ext-1")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_style_profile_save_is_an_upsert() {
    let app = create_test_app(create_test_app_state());
    let header = bearer_for("ext-1");

    let (status, first) = send(
        &app,
        "PUT",
        "/api/users/style-profile",
        Some(&header),
        Some(json!({
            "preferredStyles": ["minimal"],
            "weeklySchedule": { "monday": "office" },
            "colorPreferences": ["black"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = send(
        &app,
        "PUT",
        "/api/users/style-profile",
        Some(&header),
        Some(json!({ "preferredStyles": ["street"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send(&app, "GET", "/api/users/style-profile", Some(&header), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(fetched["data"]["preferredStyles"], json!(["street"]));
    assert_eq!(fetched["data"]["weeklySchedule"]["monday"], "");
}

#[tokio::test]
async fn test_style_profiles_are_per_user() {
    let app = create_test_app(create_test_app_state());
    send(
        &app,
        "PUT",
        "/api/users/style-profile",
        Some(&bearer_for("alice")),
        Some(json!({ "preferredStyles": ["boho"] })),
    )
    .await;

    let (status, _) = send(
        &app,
        "GET",
        "/api/users/style-profile",
        Some(&bearer_for("bob")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_account_removes_everything_owned() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());
    let header = bearer_for("ext-1");
    let item_id = create_item(&app, "ext-1", shirt()).await;
    create_outfit(&app, "ext-1", "Last look", &[item_id]).await;
    send(
        &app,
        "PUT",
        "/api/users/style-profile",
        Some(&header),
        Some(json!({ "preferredStyles": ["classic"] })),
    )
    .await;
    let (_, before) = send(&app, "GET", "/api/auth/user", Some(&header), None).await;

    let (status, json) = send(&app, "DELETE", "/api/users/account", Some(&header), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Account deleted successfully");
    assert_eq!(state.users.count(), 0);

    // The same token provisions a fresh, empty account
    let (_, after) = send(&app, "GET", "/api/auth/user", Some(&header), None).await;
    let (_, items) = send(&app, "GET", "/api/wardrobe/items", Some(&header), None).await;
    let (_, outfits) = send(&app, "GET", "/api/outfits", Some(&header), None).await;
    let (profile_status, _) =
        send(&app, "GET", "/api/users/style-profile", Some(&header), None).await;

    assert_ne!(before["data"]["id"], after["data"]["id"]);
    assert_eq!(items["data"], json!([]));
    assert_eq!(outfits["data"], json!([]));
    assert_eq!(profile_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_account_leaves_other_users_alone() {
    let state = create_test_app_state();
    let app = create_test_app(state.clone());
    create_item(&app, "alice", shirt()).await;
    create_item(&app, "bob", shirt()).await;

    send(&app, "DELETE", "/api/users/account", Some(&bearer_for("bob")), None).await;

    let (_, items) = send(&app, "GET", "/api/wardrobe/items", Some(&bearer_for("alice")), None).await;
    assert_eq!(items["data"].as_array().unwrap().len(), 1);
    assert_eq!(state.users.count(), 1);
}
