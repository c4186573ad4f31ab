use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizQuestion};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>>;
    /// Full replace of the stored document with the same id.
    async fn update(&self, question: QuizQuestion) -> AppResult<QuizQuestion>;
    /// Returns whether a question with the given id existed.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
    async fn list_all(&self) -> AppResult<Vec<QuizQuestion>>;
    async fn find_by_category(&self, category: &str) -> AppResult<Vec<QuizQuestion>>;
    async fn find_by_difficulty(&self, difficulty: &str) -> AppResult<Vec<QuizQuestion>>;
    async fn find_by_category_and_difficulty(
        &self,
        category: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuizQuestion>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<QuizQuestion>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        let filter_index = IndexModel::builder()
            .keys(doc! { "category": 1, "difficulty": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_difficulty".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(filter_index).await?;

        Ok(())
    }

    async fn find_filtered(
        &self,
        filter: mongodb::bson::Document,
    ) -> AppResult<Vec<QuizQuestion>> {
        let cursor = self.collection.find(filter).await?;
        let questions: Vec<QuizQuestion> = cursor.try_collect().await?;
        Ok(questions)
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn update(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        self.collection
            .replace_one(doc! { "id": &question.id }, &question)
            .await?;
        Ok(question)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<QuizQuestion>> {
        self.find_filtered(doc! {}).await
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<QuizQuestion>> {
        self.find_filtered(doc! { "category": category }).await
    }

    async fn find_by_difficulty(&self, difficulty: &str) -> AppResult<Vec<QuizQuestion>> {
        self.find_filtered(doc! { "difficulty": difficulty }).await
    }

    async fn find_by_category_and_difficulty(
        &self,
        category: &str,
        difficulty: &str,
    ) -> AppResult<Vec<QuizQuestion>> {
        self.find_filtered(doc! { "category": category, "difficulty": difficulty })
            .await
    }
}
