use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingCategory {
    pub id: String,
    pub name: String,
    pub subcategories: Vec<String>,
}

impl ClothingCategory {
    fn new(id: &str, name: &str, subcategories: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The fixed category catalogue offered to every user
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "tops",
                "Tops",
                &["T-Shirts", "Shirts", "Blouses", "Sweaters", "Hoodies", "Tank Tops"],
            ),
            Self::new(
                "bottoms",
                "Bottoms",
                &["Jeans", "Pants", "Shorts", "Skirts", "Leggings"],
            ),
            Self::new(
                "dresses",
                "Dresses",
                &["Casual Dresses", "Formal Dresses", "Maxi Dresses", "Mini Dresses"],
            ),
            Self::new(
                "outerwear",
                "Outerwear",
                &["Jackets", "Coats", "Blazers", "Cardigans", "Vests"],
            ),
            Self::new(
                "shoes",
                "Shoes",
                &["Sneakers", "Boots", "Heels", "Flats", "Sandals", "Athletic Shoes"],
            ),
            Self::new(
                "accessories",
                "Accessories",
                &["Bags", "Jewelry", "Hats", "Scarves", "Belts", "Watches"],
            ),
        ]
    }
}
