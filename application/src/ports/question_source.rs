//! Question source port
//!
//! The questionnaire is loaded once per quiz and treated as immutable for
//! the rest of the session.

use async_trait::async_trait;
use poligrade_domain::Question;
use thiserror::Error;

/// Errors that can occur while loading the questionnaire
#[derive(Error, Debug)]
pub enum QuestionSourceError {
    #[error("Questionnaire not found: {0}")]
    NotFound(String),

    #[error("Malformed questionnaire: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Supplies the ordered list of quiz questions
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

/// Fixed in-memory questionnaire
///
/// Handy for scripted runs and tests where no file is involved.
pub struct StaticQuestions(Vec<Question>);

impl StaticQuestions {
    pub fn new(questions: Vec<Question>) -> Self {
        Self(questions)
    }
}

#[async_trait]
impl QuestionSource for StaticQuestions {
    async fn load_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.0.clone())
    }
}
