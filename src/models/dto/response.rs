use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    auth::keygen,
    models::domain::{AccessKey, KeyRole},
};

/// List view of a stored key. The secret is always masked; the true value is
/// only ever returned once, at creation, via [`CreatedKeyResponse`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyView {
    pub id: String,
    pub role: KeyRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub masked_secret: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<AccessKey> for KeyView {
    fn from(key: AccessKey) -> Self {
        KeyView {
            id: key.id,
            role: key.role,
            label: key.label,
            created_at: key.created_at,
            masked_secret: keygen::mask_secret(&key.secret),
            owner_id: key.owner_id,
            display_name: key.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedKeyResponse {
    pub id: String,
    pub secret: String,
    pub role: KeyRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<AccessKey> for CreatedKeyResponse {
    fn from(key: AccessKey) -> Self {
        CreatedKeyResponse {
            id: key.id,
            secret: key.secret,
            role: key.role,
            label: key.label,
            owner_id: key.owner_id,
            display_name: key.display_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatistics {
    pub total_questions: u64,
    pub multiple_choice_questions: u64,
    pub text_questions: u64,
    pub matching_questions: u64,
}
