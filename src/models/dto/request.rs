use serde::Deserialize;

use crate::models::domain::{CategoryMapping, KeyRole, QuestionType, QuizQuestion};

/// Body for `POST /api/keys`. A missing or unknown role is rejected at the
/// deserialization boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyRequest {
    pub role: KeyRole,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Body for `POST /api/quiz` and `PUT /api/quiz/{id}`: the full flat question
/// shape without an id. Updates are full-replace, never partial.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub question: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub answers: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer_indices: Option<Vec<usize>>,
    #[serde(default)]
    pub text_answer: Option<String>,
    #[serde(default)]
    pub left_items: Option<Vec<String>>,
    #[serde(default)]
    pub right_items: Option<Vec<String>>,
    #[serde(default)]
    pub correct_mappings: Option<Vec<CategoryMapping>>,
    pub category: String,
    pub difficulty: String,
}

impl QuestionPayload {
    pub fn into_question(self, id: String) -> QuizQuestion {
        QuizQuestion {
            id,
            question: self.question,
            question_type: self.question_type,
            answers: self.answers,
            correct_answer_indices: self.correct_answer_indices,
            text_answer: self.text_answer,
            left_items: self.left_items,
            right_items: self.right_items,
            correct_mappings: self.correct_mappings,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Query params for `GET /api/quiz/filter`. Absent criteria are wildcards.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterParams {
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

/// Query params for `GET /api/quiz/random`.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomParams {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}
