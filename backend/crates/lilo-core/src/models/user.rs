use crate::Entity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local user record, linked one-to-one to an external identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Subject id issued by the external identity provider (unique)
    pub external_id: String,

    pub email: String,
    pub name: String,
    pub picture: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(external_id: String, email: String, name: String, picture: String) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            external_id,
            email,
            name,
            picture,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    crate::impl_entity_fields!();

    fn lookup_key(&self) -> Option<&str> {
        Some(&self.external_id)
    }
}
