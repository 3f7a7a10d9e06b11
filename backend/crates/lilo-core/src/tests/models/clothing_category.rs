use crate::ClothingCategory;

#[test]
fn test_default_categories_cover_catalogue() {
    let ids: Vec<String> = ClothingCategory::defaults()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(
        ids,
        vec!["tops", "bottoms", "dresses", "outerwear", "shoes", "accessories"]
    );
}

#[test]
fn test_every_default_category_has_subcategories() {
    for category in ClothingCategory::defaults() {
        assert!(
            !category.subcategories.is_empty(),
            "{} has no subcategories",
            category.id
        );
    }
}
