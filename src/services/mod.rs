pub mod key_service;
pub mod quiz_service;

pub use key_service::KeyService;
pub use quiz_service::QuizService;
