use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateReflectionRequest {
    pub outfit_id: String,
    /// When the outfit was worn; defaults to now
    pub date: Option<DateTime<Utc>>,
    /// 1-5
    pub confidence: u8,
    /// 1-5
    pub comfort: u8,
    pub would_rewear: bool,
    pub notes: Option<String>,
}
