use serde::{Deserialize, Serialize};

/// A quiz question in the flat wire shape: a `questionType` tag plus optional
/// shape-specific fields. Fields foreign to the active shape are cleared by
/// [`QuizQuestion::normalize`] before a question is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub question_type: QuestionType,

    // Multiple choice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer_indices: Option<Vec<usize>>,

    // Text only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_answer: Option<String>,

    // Matching only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_mappings: Option<Vec<CategoryMapping>>,

    pub category: String,
    pub difficulty: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "matching")]
    Matching,
}

/// Assigns one right-hand category to one or more left-hand items, by index.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMapping {
    pub category_index: usize,
    pub item_indices: Vec<usize>,
}

impl QuizQuestion {
    /// Structural validity check. Total: never panics, never errors.
    ///
    /// Common fields must be non-blank; the shape-specific fields of the
    /// active `question_type` must be present, non-blank and index-consistent.
    /// Absent shape fields count as empty. Index bounds are half-open.
    pub fn is_valid(&self) -> bool {
        if self.question.trim().is_empty()
            || self.category.trim().is_empty()
            || self.difficulty.trim().is_empty()
        {
            return false;
        }

        match self.question_type {
            QuestionType::MultipleChoice => self.is_valid_multiple_choice(),
            QuestionType::Text => self.is_valid_text(),
            QuestionType::Matching => self.is_valid_matching(),
        }
    }

    fn is_valid_multiple_choice(&self) -> bool {
        let answers = self.answers.as_deref().unwrap_or_default();
        let indices = self.correct_answer_indices.as_deref().unwrap_or_default();

        !answers.is_empty()
            && answers.iter().all(|a| !a.trim().is_empty())
            && !indices.is_empty()
            && indices.iter().all(|&i| i < answers.len())
    }

    fn is_valid_text(&self) -> bool {
        self.text_answer
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty())
    }

    fn is_valid_matching(&self) -> bool {
        let left_items = self.left_items.as_deref().unwrap_or_default();
        let right_items = self.right_items.as_deref().unwrap_or_default();
        let mappings = self.correct_mappings.as_deref().unwrap_or_default();

        !left_items.is_empty()
            && left_items.iter().all(|i| !i.trim().is_empty())
            && !right_items.is_empty()
            && right_items.iter().all(|i| !i.trim().is_empty())
            && !mappings.is_empty()
            && mappings.iter().all(|m| {
                m.category_index < right_items.len()
                    && !m.item_indices.is_empty()
                    && m.item_indices.iter().all(|&i| i < left_items.len())
            })
    }

    /// Clears every field not owned by the active `question_type`, so stale
    /// cross-shape data never persists. Runs before validation is final.
    pub fn normalize(&mut self) {
        match self.question_type {
            QuestionType::MultipleChoice => {
                self.text_answer = None;
                self.left_items = None;
                self.right_items = None;
                self.correct_mappings = None;
            }
            QuestionType::Text => {
                self.answers = None;
                self.correct_answer_indices = None;
                self.left_items = None;
                self.right_items = None;
                self.correct_mappings = None;
            }
            QuestionType::Matching => {
                self.answers = None;
                self.correct_answer_indices = None;
                self.text_answer = None;
            }
        }
    }
}
