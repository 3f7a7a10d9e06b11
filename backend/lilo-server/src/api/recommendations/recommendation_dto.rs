use lilo_core::{Feedback, Recommendation};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub id: String,
    pub user_id: String,
    pub outfit_id: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub styling_tips: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Recommendation> for RecommendationDto {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            id: recommendation.id,
            user_id: recommendation.user_id,
            outfit_id: recommendation.outfit_id,
            date: recommendation.date,
            feedback: recommendation.feedback,
            reason: recommendation.reason,
            styling_tips: recommendation.styling_tips,
            created_at: recommendation.created_at,
        }
    }
}
