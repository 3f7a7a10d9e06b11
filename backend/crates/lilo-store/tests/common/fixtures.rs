use lilo_core::{ClothingItem, Outfit, Recommendation, Reflection, StyleProfile, User};

pub fn create_test_user(external_id: &str) -> User {
    User::new(
        external_id.to_string(),
        format!("{external_id}@example.com"),
        "Test User".to_string(),
        String::new(),
    )
}

pub fn create_test_item(user_id: &str, name: &str, category: &str, color: &str) -> ClothingItem {
    ClothingItem::new(
        user_id.to_string(),
        name.to_string(),
        category.to_string(),
        color.to_string(),
    )
}

pub fn create_test_outfit(user_id: &str, name: &str) -> Outfit {
    let mut outfit = Outfit::new(user_id.to_string(), name.to_string(), vec!["item-1".to_string()]);
    outfit.occasion = vec!["casual".to_string()];
    outfit.season = vec!["Spring".to_string()];
    outfit
}

pub fn create_test_reflection(user_id: &str, outfit_id: &str) -> Reflection {
    Reflection::new(user_id.to_string(), outfit_id.to_string(), 4, 5)
}

pub fn create_test_recommendation(user_id: &str, outfit_id: &str) -> Recommendation {
    Recommendation::new(user_id.to_string(), outfit_id.to_string(), None)
}

pub fn create_test_profile(user_id: &str, colors: &[&str]) -> StyleProfile {
    let mut profile = StyleProfile::new(user_id.to_string());
    profile.color_preferences = colors.iter().map(|c| c.to_string()).collect();
    profile
}
