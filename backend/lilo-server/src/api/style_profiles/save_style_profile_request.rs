use lilo_core::WeeklySchedule;

use std::collections::HashMap;

use serde::Deserialize;

/// Full replacement of the user's style preferences
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveStyleProfileRequest {
    pub preferred_styles: Vec<String>,
    pub weekly_schedule: WeeklySchedule,
    pub seasonal_preferences: HashMap<String, Vec<String>>,
    pub color_preferences: Vec<String>,
}
