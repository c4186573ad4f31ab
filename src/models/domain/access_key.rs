use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::keygen;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKey {
    pub id: String,
    pub secret: String,
    pub role: KeyRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Role attached to a stored API key. Admin and KeyManager do not subsume
/// each other; only User is satisfied by all three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyRole {
    User,
    Admin,
    KeyManager,
}

impl AccessKey {
    /// Mints a key with a fresh random secret and owner id.
    pub fn new(role: KeyRole, label: Option<String>, display_name: Option<String>) -> Self {
        AccessKey {
            id: Uuid::new_v4().to_string(),
            secret: keygen::generate_secret(),
            role,
            label,
            owner_id: Uuid::new_v4().to_string(),
            display_name,
            created_at: Utc::now(),
        }
    }
}
