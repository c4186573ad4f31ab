use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizdeck_server::{
    app_state::AppState,
    auth::ApiKeyGate,
    config::Config,
    errors::AppResult,
    models::domain::{AccessKey, KeyRole, QuizQuestion},
    repositories::{AccessKeyRepository, QuestionRepository},
    services::{KeyService, QuizService},
};

pub const MASTER_KEY: &str = "integration-test-master-key";

pub struct InMemoryAccessKeyRepository {
    keys: RwLock<HashMap<String, AccessKey>>,
}

impl InMemoryAccessKeyRepository {
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AccessKeyRepository for InMemoryAccessKeyRepository {
    async fn find_by_secret(&self, secret: &str) -> AppResult<Option<AccessKey>> {
        let keys = self.keys.read().await;
        Ok(keys.values().find(|k| k.secret == secret).cloned())
    }

    async fn create(&self, key: AccessKey) -> AppResult<AccessKey> {
        let mut keys = self.keys.write().await;
        keys.insert(key.id.clone(), key.clone());
        Ok(key)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut keys = self.keys.write().await;
        Ok(keys.remove(id).is_some())
    }

    async fn list_all(&self) -> AppResult<Vec<AccessKey>> {
        let keys = self.keys.read().await;
        Ok(keys.values().cloned().collect())
    }
}

pub struct InMemoryQuestionRepository {
    questions: RwLock<HashMap<String, QuizQuestion>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        let mut questions = self.questions.write().await;
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn update(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        let mut questions = self.questions.write().await;
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut questions = self.questions.write().await;
        Ok(questions.remove(id).is_some())
    }

    async fn list_all(&self) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions.values().cloned().collect())
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<QuizQuestion>> {
        let all = self.list_all().await?;
        Ok(all.into_iter().filter(|q| q.category == category).collect())
    }

    async fn find_by_difficulty(&self, difficulty: &str) -> AppResult<Vec<QuizQuestion>> {
        let all = self.list_all().await?;
        Ok(all
            .into_iter()
            .filter(|q| q.difficulty == difficulty)
            .collect())
    }

    async fn find_by_category_and_difficulty(
        &self,
        category: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuizQuestion>> {
        let all = self.list_all().await?;
        Ok(all
            .into_iter()
            .filter(|q| q.category == category && q.difficulty == difficulty)
            .collect())
    }
}

/// Builds app state over in-memory stores, seeding one key per role with a
/// predictable secret ("user-secret", "admin-secret", "key-manager-secret").
pub async fn test_state() -> AppState {
    let key_repository = Arc::new(InMemoryAccessKeyRepository::new());

    for (role, secret) in [
        (KeyRole::User, "user-secret"),
        (KeyRole::Admin, "admin-secret"),
        (KeyRole::KeyManager, "key-manager-secret"),
    ] {
        let mut key = AccessKey::new(role, None, None);
        key.secret = secret.to_string();
        key_repository.create(key).await.unwrap();
    }

    let question_repository = Arc::new(InMemoryQuestionRepository::new());

    let gate = Arc::new(ApiKeyGate::new(
        key_repository.clone(),
        SecretString::from(MASTER_KEY.to_string()),
    ));

    let mut config = Config::from_env();
    config.master_key = SecretString::from(MASTER_KEY.to_string());

    AppState::with_components(
        Arc::new(KeyService::new(key_repository)),
        Arc::new(QuizService::new(question_repository)),
        gate,
        config,
    )
}

/// Registers the full route set behind the API key middleware, mirroring the
/// production app assembly.
#[macro_export]
macro_rules! init_test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .app_data(actix_web::web::Data::from($state.gate.clone()))
                .wrap(quizdeck_server::auth::ApiKeyMiddleware)
                .service(quizdeck_server::handlers::health_check)
                .service(quizdeck_server::handlers::list_keys)
                .service(quizdeck_server::handlers::create_key)
                .service(quizdeck_server::handlers::delete_key)
                .service(quizdeck_server::handlers::random_question)
                .service(quizdeck_server::handlers::statistics)
                .service(quizdeck_server::handlers::filter_questions)
                .service(quizdeck_server::handlers::questions_by_category)
                .service(quizdeck_server::handlers::questions_by_difficulty)
                .service(quizdeck_server::handlers::list_questions)
                .service(quizdeck_server::handlers::create_question)
                .service(quizdeck_server::handlers::get_question)
                .service(quizdeck_server::handlers::update_question)
                .service(quizdeck_server::handlers::delete_question),
        )
        .await
    };
}
