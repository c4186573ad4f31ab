use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuestionType, QuizQuestion},
        dto::{QuestionPayload, QuizStatistics},
    },
    repositories::QuestionRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Normalizes and validates the payload, then stores it under a fresh id.
    pub async fn create_question(&self, payload: QuestionPayload) -> AppResult<QuizQuestion> {
        let mut question = payload.into_question(Uuid::new_v4().to_string());
        question.normalize();

        if !question.is_valid() {
            return Err(AppError::ValidationError("Invalid question data".to_string()));
        }

        self.repository.create(question).await
    }

    pub async fn get_question(&self, id: &str) -> AppResult<QuizQuestion> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn list_questions(&self) -> AppResult<Vec<QuizQuestion>> {
        self.repository.list_all().await
    }

    pub async fn questions_by_category(&self, category: &str) -> AppResult<Vec<QuizQuestion>> {
        self.repository.find_by_category(category).await
    }

    pub async fn questions_by_difficulty(&self, difficulty: &str) -> AppResult<Vec<QuizQuestion>> {
        self.repository.find_by_difficulty(difficulty).await
    }

    /// Full-replace update: every field is overwritten from the payload,
    /// re-normalized and re-validated. There is no partial patch.
    pub async fn update_question(
        &self,
        id: &str,
        payload: QuestionPayload,
    ) -> AppResult<QuizQuestion> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))?;

        let mut question = payload.into_question(existing.id);
        question.normalize();

        if !question.is_valid() {
            return Err(AppError::ValidationError("Invalid question data".to_string()));
        }

        self.repository.update(question).await
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    /// In-memory AND over the provided criteria; absent criteria match all.
    pub async fn filter_questions(
        &self,
        question_type: Option<QuestionType>,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<QuizQuestion>> {
        let mut questions = self.repository.list_all().await?;

        questions.retain(|q| {
            question_type.map_or(true, |t| q.question_type == t)
                && category.map_or(true, |c| q.category == c)
                && difficulty.map_or(true, |d| q.difficulty == d)
        });

        Ok(questions)
    }

    /// Uniform-random pick over the questions matching the given criteria.
    /// An empty result set is a NotFound condition, never a panic.
    pub async fn random_question(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<QuizQuestion> {
        let mut questions = match (category, difficulty) {
            (Some(c), Some(d)) => self.repository.find_by_category_and_difficulty(c, d).await?,
            (Some(c), None) => self.repository.find_by_category(c).await?,
            (None, Some(d)) => self.repository.find_by_difficulty(d).await?,
            (None, None) => self.repository.list_all().await?,
        };

        if questions.is_empty() {
            return Err(AppError::NotFound(
                "No questions match the given criteria".to_string(),
            ));
        }

        let index = rand::thread_rng().gen_range(0..questions.len());
        Ok(questions.swap_remove(index))
    }

    /// Single pass over the full set: total plus per-type counts.
    pub async fn statistics(&self) -> AppResult<QuizStatistics> {
        let questions = self.repository.list_all().await?;

        let mut stats = QuizStatistics {
            total_questions: 0,
            multiple_choice_questions: 0,
            text_questions: 0,
            matching_questions: 0,
        };

        for question in &questions {
            stats.total_questions += 1;
            match question.question_type {
                QuestionType::MultipleChoice => stats.multiple_choice_questions += 1,
                QuestionType::Text => stats.text_questions += 1,
                QuestionType::Matching => stats.matching_questions += 1,
            }
        }

        Ok(stats)
    }
}
