use crate::{Entity, Result as CoreErrorResult, require_non_empty, require_rating};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User feedback on an outfit they wore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    pub user_id: String,
    pub outfit_id: String,

    pub date: DateTime<Utc>,
    /// 1-5
    pub confidence: u8,
    /// 1-5
    pub comfort: u8,
    pub would_rewear: bool,
    pub notes: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reflection {
    pub fn new(user_id: String, outfit_id: String, confidence: u8, comfort: u8) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            user_id,
            outfit_id,
            date: now,
            confidence,
            comfort,
            would_rewear: false,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_non_empty(&self.outfit_id, "outfit_id")?;
        require_rating(self.confidence, "confidence")?;
        require_rating(self.comfort, "comfort")?;
        Ok(())
    }
}

impl Entity for Reflection {
    crate::impl_entity_fields!();

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }
}
