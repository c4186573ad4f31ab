pub mod request;
pub mod response;

pub use request::{CreateKeyRequest, FilterParams, QuestionPayload, RandomParams};
pub use response::{CreatedKeyResponse, KeyView, QuizStatistics};
