use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOutfitRequest {
    pub name: String,
    pub description: Option<String>,
    /// Ids of the caller's own clothing items; at least one
    pub items: Vec<String>,
    /// Defaults to `casual` when empty
    pub occasion: Vec<String>,
    /// Defaults to all four seasons when empty
    pub season: Vec<String>,
    pub image_url: Option<String>,
    pub is_favorite: bool,
}
