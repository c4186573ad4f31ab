use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::AccessKey};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessKeyRepository: Send + Sync {
    async fn find_by_secret(&self, secret: &str) -> AppResult<Option<AccessKey>>;
    async fn create(&self, key: AccessKey) -> AppResult<AccessKey>;
    /// Returns whether a key with the given id existed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
    async fn list_all(&self) -> AppResult<Vec<AccessKey>>;
}

pub struct MongoAccessKeyRepository {
    collection: Collection<AccessKey>,
}

impl MongoAccessKeyRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("access_keys");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for access_keys collection");

        let secret_index = IndexModel::builder()
            .keys(doc! { "secret": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("secret_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(secret_index).await?;

        Ok(())
    }
}

#[async_trait]
impl AccessKeyRepository for MongoAccessKeyRepository {
    async fn find_by_secret(&self, secret: &str) -> AppResult<Option<AccessKey>> {
        let key = self.collection.find_one(doc! { "secret": secret }).await?;
        Ok(key)
    }

    async fn create(&self, key: AccessKey) -> AppResult<AccessKey> {
        // A secret collision trips the unique index and fails the insert.
        self.collection.insert_one(&key).await?;
        Ok(key)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<AccessKey>> {
        let cursor = self.collection.find(doc! {}).await?;
        let keys: Vec<AccessKey> = cursor.try_collect().await?;
        Ok(keys)
    }
}
