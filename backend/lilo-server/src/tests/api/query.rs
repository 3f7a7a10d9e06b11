use crate::api::query::{InvalidFlag, non_empty, parse_flag};
use crate::{ListClothingItemsQuery, ListOutfitsQuery};

#[test]
fn test_parse_flag_accepts_common_spellings() {
    for raw in ["true", "TRUE", "t", "1", " True "] {
        assert_eq!(parse_flag(Some(raw)), Ok(Some(true)), "input {raw:?}");
    }
    for raw in ["false", "False", "f", "0"] {
        assert_eq!(parse_flag(Some(raw)), Ok(Some(false)), "input {raw:?}");
    }
}

#[test]
fn test_parse_flag_treats_missing_and_blank_as_unconstrained() {
    assert_eq!(parse_flag(None), Ok(None));
    assert_eq!(parse_flag(Some("")), Ok(None));
    assert_eq!(parse_flag(Some("   ")), Ok(None));
}

#[test]
fn test_parse_flag_rejects_other_values() {
    assert_eq!(parse_flag(Some("yes")), Err(InvalidFlag));
    assert_eq!(parse_flag(Some("2")), Err(InvalidFlag));
}

#[test]
fn test_non_empty_drops_blank_values() {
    assert_eq!(non_empty(Some("  ".into())), None);
    assert_eq!(non_empty(Some("tops".into())), Some("tops".into()));
    assert_eq!(non_empty(None), None);
}

#[test]
fn test_clothing_item_query_builds_filter() {
    let query = ListClothingItemsQuery {
        category: Some("tops".into()),
        color: Some(String::new()),
        season: Some("Summer".into()),
        is_owned: Some("false".into()),
    };

    let filter = query.into_filter().unwrap();

    assert_eq!(filter.category.as_deref(), Some("tops"));
    assert_eq!(filter.color, None);
    assert_eq!(filter.season.as_deref(), Some("Summer"));
    assert_eq!(filter.is_owned, Some(false));
}

#[test]
fn test_outfit_query_with_bad_flag_is_rejected() {
    let query = ListOutfitsQuery {
        is_favorite: Some("maybe".into()),
        ..Default::default()
    };

    assert_eq!(query.into_filter(), Err(InvalidFlag));
}
