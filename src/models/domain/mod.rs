pub mod quiz_question;
pub mod quiz_request;
pub use quiz_question::{QuizQuestion, QuizQuestionSet};
pub use quiz_request::{Difficulty, QuestionCount, QuizRequest};
