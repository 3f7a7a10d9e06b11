use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub recommendation_id: String,
    /// `liked`, `disliked` or `neutral`
    pub feedback: String,
}
