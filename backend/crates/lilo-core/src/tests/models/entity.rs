use crate::{ClothingItem, Entity, StyleProfile, User};

#[test]
fn test_user_is_keyed_by_external_id_and_unowned() {
    let user = User::new(
        "ext-1".into(),
        "a@b.com".into(),
        String::new(),
        String::new(),
    );

    assert_eq!(user.lookup_key(), Some("ext-1"));
    assert_eq!(user.owner_id(), None);
    assert!(user.id().is_empty());
}

#[test]
fn test_clothing_item_is_owned_without_lookup_key() {
    let item = ClothingItem::new("u1".into(), "Tee".into(), "tops".into(), "white".into());

    assert_eq!(item.owner_id(), Some("u1"));
    assert_eq!(item.lookup_key(), None);
    assert!(item.is_owned);
}

#[test]
fn test_style_profile_is_unique_per_user() {
    let profile = StyleProfile::new("u1".into());

    assert_eq!(profile.owner_id(), Some("u1"));
    assert_eq!(profile.lookup_key(), Some("u1"));
}

#[test]
fn test_set_id_replaces_id() {
    let mut user = User::new("ext-1".into(), String::new(), String::new(), String::new());
    user.set_id("abc".into());

    assert_eq!(user.id(), "abc");
}
