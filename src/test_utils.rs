use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{AccessKey, QuizQuestion},
    repositories::{AccessKeyRepository, QuestionRepository},
};

/// In-memory stand-in for the Mongo key store, for unit tests.
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
        let mut all: Vec<_> = keys.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}

/// In-memory stand-in for the Mongo question store, for unit tests.
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
        let mut all: Vec<_> = questions.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
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

pub mod fixtures {
    use crate::models::{
        domain::{CategoryMapping, QuestionType},
        dto::QuestionPayload,
    };

    /// A valid multiple-choice payload with two correct answers.
    pub fn multiple_choice_payload(category: &str, difficulty: &str) -> QuestionPayload {
        QuestionPayload {
            question: "Which planets are gas giants?".to_string(),
            question_type: QuestionType::MultipleChoice,
            answers: Some(vec![
                "Jupiter".to_string(),
                "Mars".to_string(),
                "Saturn".to_string(),
            ]),
            correct_answer_indices: Some(vec![0, 2]),
            text_answer: None,
            left_items: None,
            right_items: None,
            correct_mappings: None,
            category: category.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    /// A valid free-text payload.
    pub fn text_payload(category: &str, difficulty: &str) -> QuestionPayload {
        QuestionPayload {
            question: "What is the capital of France?".to_string(),
            question_type: QuestionType::Text,
            answers: None,
            correct_answer_indices: None,
            text_answer: Some("Paris".to_string()),
            left_items: None,
            right_items: None,
            correct_mappings: None,
            category: category.to_string(),
            difficulty: difficulty.to_string(),
        }
    }

    /// A valid matching payload with two categories.
    pub fn matching_payload(category: &str, difficulty: &str) -> QuestionPayload {
        QuestionPayload {
            question: "Match each animal to its class".to_string(),
            question_type: QuestionType::Matching,
            answers: None,
            correct_answer_indices: None,
            text_answer: None,
            left_items: Some(vec!["Eagle".to_string(), "Salmon".to_string()]),
            right_items: Some(vec!["Bird".to_string(), "Fish".to_string()]),
            correct_mappings: Some(vec![
                CategoryMapping {
                    category_index: 0,
                    item_indices: vec![0],
                },
                CategoryMapping {
                    category_index: 1,
                    item_indices: vec![1],
                },
            ]),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use uuid::Uuid;

    #[test]
    fn fixture_payloads_are_valid() {
        for payload in [
            multiple_choice_payload("misc", "easy"),
            text_payload("misc", "easy"),
            matching_payload("misc", "easy"),
        ] {
            let question = payload.into_question(Uuid::new_v4().to_string());
            assert!(question.is_valid());
        }
    }
}
