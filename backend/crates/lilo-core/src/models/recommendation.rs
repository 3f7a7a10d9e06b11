use crate::{Entity, Feedback};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record that an outfit was suggested to its owner on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub user_id: String,
    pub outfit_id: String,

    pub date: DateTime<Utc>,
    pub feedback: Option<Feedback>,
    pub reason: Option<String>,
    pub styling_tips: Vec<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(user_id: String, outfit_id: String, reason: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id,
            outfit_id,
            date: now,
            feedback: None,
            reason,
            styling_tips: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Recommendation {
    crate::impl_entity_fields!();

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
