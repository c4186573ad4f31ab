use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::AccessKey,
        dto::{CreateKeyRequest, CreatedKeyResponse, KeyView},
    },
    repositories::AccessKeyRepository,
};

pub struct KeyService {
    repository: Arc<dyn AccessKeyRepository>,
}

impl KeyService {
    pub fn new(repository: Arc<dyn AccessKeyRepository>) -> Self {
        Self { repository }
    }

    /// Lists all stored keys with masked secrets.
    pub async fn list_keys(&self) -> AppResult<Vec<KeyView>> {
        let keys = self.repository.list_all().await?;
        Ok(keys.into_iter().map(KeyView::from).collect())
    }

    /// Mints and stores a new key. The response carries the plaintext secret;
    /// this is the only place it ever leaves the server.
    pub async fn create_key(&self, request: CreateKeyRequest) -> AppResult<CreatedKeyResponse> {
        let key = AccessKey::new(request.role, request.label, request.display_name);
        let key = self.repository.create(key).await?;

        log::info!("Created {:?} access key '{}'", key.role, key.id);
        Ok(CreatedKeyResponse::from(key))
    }

    pub async fn delete_key(&self, id: &str) -> AppResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Key with id '{}' not found", id)));
        }

        log::info!("Deleted access key '{}'", id);
        Ok(())
    }
}
