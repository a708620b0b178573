//! Daily questions, member answers, and answer search by date.

mod repository;
pub mod service;
mod types;

pub use repository::QuestionRepository;
pub use service::QuestionService;
pub use types::{Answer, AnswerView, NewAnswer, Question, SearchCondition, ANSWER_DATE_FORMAT};
