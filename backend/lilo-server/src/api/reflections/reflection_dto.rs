use lilo_core::Reflection;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionDto {
    pub id: String,
    pub user_id: String,
    pub outfit_id: String,
    pub date: DateTime<Utc>,
    pub confidence: u8,
    pub comfort: u8,
    pub would_rewear: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Reflection> for ReflectionDto {
    fn from(reflection: Reflection) -> Self {
        Self {
            id: reflection.id,
            user_id: reflection.user_id,
            outfit_id: reflection.outfit_id,
            date: reflection.date,
            confidence: reflection.confidence,
            comfort: reflection.comfort,
            would_rewear: reflection.would_rewear,
            notes: reflection.notes,
            created_at: reflection.created_at,
        }
    }
}
