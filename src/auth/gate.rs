use std::sync::Arc;

use actix_web::http::Method;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::role::{permits, RequiredRole},
    errors::{AppError, AppResult},
    repositories::AccessKeyRepository,
};

const KEYS_NAMESPACE: &str = "/api/keys";
const QUIZ_NAMESPACE: &str = "/api/quiz";

/// Per-request authorization decision unit.
///
/// Classifies the request into a required access level, resolves the
/// presented credential (master-key bypass or store lookup) and applies the
/// role hierarchy. Holds no mutable state; the only side effect is the
/// read-only key lookup.
pub struct ApiKeyGate {
    keys: Arc<dyn AccessKeyRepository>,
    master_key: SecretString,
}

impl ApiKeyGate {
    pub fn new(keys: Arc<dyn AccessKeyRepository>, master_key: SecretString) -> Self {
        Self { keys, master_key }
    }

    /// Maps a path+method onto the access level it demands.
    ///
    /// Key management always demands KeyManager. Quiz writes demand Admin,
    /// quiz reads User. Everything else is open.
    pub fn classify(path: &str, method: &Method) -> RequiredRole {
        if path.starts_with(KEYS_NAMESPACE) {
            return RequiredRole::KeyManager;
        }

        if path.starts_with(QUIZ_NAMESPACE) {
            return match *method {
                Method::POST | Method::PUT | Method::DELETE => RequiredRole::Admin,
                _ => RequiredRole::User,
            };
        }

        RequiredRole::None
    }

    pub async fn authorize(
        &self,
        path: &str,
        method: &Method,
        presented: Option<&str>,
    ) -> AppResult<()> {
        let required = Self::classify(path, method);
        if required == RequiredRole::None {
            return Ok(());
        }

        let presented = match presented {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Err(AppError::Unauthorized("Missing API key".to_string())),
        };

        if self.is_master_key(presented) {
            return Ok(());
        }

        let key = self
            .keys
            .find_by_secret(presented)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid API key".to_string()))?;

        if !permits(required, key.role) {
            return Err(AppError::Forbidden(
                "Insufficient role for this action".to_string(),
            ));
        }

        Ok(())
    }

    fn is_master_key(&self, presented: &str) -> bool {
        let master = self.master_key.expose_secret();
        !master.trim().is_empty() && master == presented
    }
}
