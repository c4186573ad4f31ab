pub mod access_key;
pub mod quiz_question;

pub use access_key::{AccessKey, KeyRole};
pub use quiz_question::{CategoryMapping, QuestionType, QuizQuestion};
