pub mod access_key_repository;
pub mod question_repository;

pub use access_key_repository::{AccessKeyRepository, MongoAccessKeyRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};

#[cfg(test)]
pub use access_key_repository::MockAccessKeyRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
