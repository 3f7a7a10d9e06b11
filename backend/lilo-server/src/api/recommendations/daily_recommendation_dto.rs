use crate::OutfitDto;

use serde::Serialize;

/// One of today's picks, with the id to send feedback against
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecommendationDto {
    pub recommendation_id: String,
    pub outfit: OutfitDto,
}
