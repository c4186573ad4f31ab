use std::sync::Arc;

use crate::{
    auth::ApiKeyGate,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAccessKeyRepository, MongoQuestionRepository},
    services::{KeyService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub key_service: Arc<KeyService>,
    pub quiz_service: Arc<QuizService>,
    pub gate: Arc<ApiKeyGate>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let key_repository = Arc::new(MongoAccessKeyRepository::new(&db));
        key_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let gate = Arc::new(ApiKeyGate::new(
            key_repository.clone(),
            config.master_key.clone(),
        ));
        let key_service = Arc::new(KeyService::new(key_repository));
        let quiz_service = Arc::new(QuizService::new(question_repository));

        Ok(Self {
            key_service,
            quiz_service,
            gate,
            config: Arc::new(config),
        })
    }

    /// Assembles state from already-built components. Used by tests that run
    /// against non-Mongo repositories.
    pub fn with_components(
        key_service: Arc<KeyService>,
        quiz_service: Arc<QuizService>,
        gate: Arc<ApiKeyGate>,
        config: Config,
    ) -> Self {
        Self {
            key_service,
            quiz_service,
            gate,
            config: Arc::new(config),
        }
    }
}
