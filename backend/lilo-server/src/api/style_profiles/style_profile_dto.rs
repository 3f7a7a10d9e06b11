use lilo_core::{StyleProfile, WeeklySchedule};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfileDto {
    pub id: String,
    pub user_id: String,
    pub preferred_styles: Vec<String>,
    pub weekly_schedule: WeeklySchedule,
    pub seasonal_preferences: HashMap<String, Vec<String>>,
    pub color_preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StyleProfile> for StyleProfileDto {
    fn from(profile: StyleProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            preferred_styles: profile.preferred_styles,
            weekly_schedule: profile.weekly_schedule,
            seasonal_preferences: profile.seasonal_preferences,
            color_preferences: profile.color_preferences,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
