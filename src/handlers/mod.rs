pub mod key_handler;
pub mod quiz_handler;

pub use key_handler::{create_key, delete_key, list_keys};
pub use quiz_handler::{
    create_question, delete_question, filter_questions, get_question, health_check,
    list_questions, questions_by_category, questions_by_difficulty, random_question, statistics,
    update_question,
};

use uuid::Uuid;

use crate::errors::AppError;

/// Malformed ids are a 400, not a 404.
fn parse_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::ValidationError(format!("Invalid id '{}'", raw)))
}
