use crate::{Entity, WeeklySchedule};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Style preferences, at most one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub id: String,
    pub user_id: String,

    pub preferred_styles: Vec<String>,
    pub weekly_schedule: WeeklySchedule,
    pub seasonal_preferences: HashMap<String, Vec<String>>,
    pub color_preferences: Vec<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StyleProfile {
    pub fn new(user_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id,
            preferred_styles: Vec::new(),
            weekly_schedule: WeeklySchedule::default(),
            seasonal_preferences: HashMap::new(),
            color_preferences: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for StyleProfile {
    crate::impl_entity_fields!();

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn lookup_key(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
