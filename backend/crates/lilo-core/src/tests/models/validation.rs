use crate::{ClothingItem, CoreError, Outfit, Reflection};

#[test]
fn test_clothing_item_without_color_fails_on_color() {
    let mut item = ClothingItem::new("u1".into(), "Tee".into(), "tops".into(), "".into());

    let result = item.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "color"
    ));
}

#[test]
fn test_clothing_item_without_season_gets_all_seasons() {
    let mut item = ClothingItem::new("u1".into(), "Tee".into(), "tops".into(), "white".into());

    item.validate().unwrap();

    assert_eq!(item.season, vec!["Spring", "Summer", "Fall", "Winter"]);
}

#[test]
fn test_outfit_without_items_is_rejected() {
    let mut outfit = Outfit::new("u1".into(), "Monday".into(), vec![]);

    let result = outfit.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "items"
    ));
}

#[test]
fn test_outfit_defaults_occasion_to_casual() {
    let mut outfit = Outfit::new("u1".into(), "Monday".into(), vec!["item-1".into()]);

    outfit.validate().unwrap();

    assert_eq!(outfit.occasion, vec!["casual"]);
    assert_eq!(outfit.season.len(), 4);
}

#[test]
fn test_reflection_rating_bounds() {
    assert!(Reflection::new("u1".into(), "o1".into(), 1, 5).validate().is_ok());
    assert!(Reflection::new("u1".into(), "o1".into(), 0, 3).validate().is_err());
    assert!(Reflection::new("u1".into(), "o1".into(), 3, 6).validate().is_err());
}
