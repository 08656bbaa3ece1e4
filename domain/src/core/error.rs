//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question index {index} is out of range (quiz has {len} questions)")]
    QuestionIndexOutOfRange { index: usize, len: usize },

    #[error("Score overflowed at question index {index}")]
    ScoreOverflow { index: usize },

    #[error("Unknown alignment label: {0}")]
    UnknownLabel(String),

    #[error("Unknown office: {0}")]
    UnknownOffice(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown state code: {0}")]
    UnknownState(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl DomainError {
    /// Check if this error came from parsing a boundary code or label
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownLabel(_)
                | DomainError::UnknownOffice(_)
                | DomainError::UnknownStatus(_)
                | DomainError::UnknownState(_)
        )
    }
}
