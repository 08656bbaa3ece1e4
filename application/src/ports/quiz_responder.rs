//! Quiz responder port
//!
//! The quiz use case drives the question loop and asks a responder for each
//! answer. The presentation layer provides an interactive terminal
//! responder; [`ScriptedResponder`] replays a fixed answer list.

use async_trait::async_trait;
use poligrade_domain::{Question, QuizOutcome};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A single response to a quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizResponse {
    /// "Yes"
    Agree,
    /// "No"
    Disagree,
    /// Leave the quiz without a result
    Quit,
}

/// Error type for responder failures.
///
/// These represent failures to obtain an answer, not the answer itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizResponderError {
    /// Input/output error (e.g., terminal read failure).
    Io(String),
    /// A scripted responder ran out of answers.
    Exhausted,
}

impl std::fmt::Display for QuizResponderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizResponderError::Io(msg) => write!(f, "I/O error: {}", msg),
            QuizResponderError::Exhausted => write!(f, "Ran out of answers"),
        }
    }
}

impl std::error::Error for QuizResponderError {}

/// Port for collecting quiz answers.
///
/// The progress hooks have empty defaults so simple responders only
/// implement [`respond`](QuizResponder::respond).
#[async_trait]
pub trait QuizResponder: Send + Sync {
    /// Ask one question. `number` is 1-based.
    async fn respond(
        &self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<QuizResponse, QuizResponderError>;

    /// Called once before the first question.
    fn on_start(&self, _total: usize) {}

    /// Called after each accepted answer with the updated completion.
    fn on_progress(&self, _answered: usize, _percent: u8) {}

    /// Called when the quiz reaches a result.
    fn on_complete(&self, _outcome: &QuizOutcome) {}

    /// Whether to take the quiz again after a result. Defaults to no.
    fn offer_retake(&self, _outcome: &QuizOutcome) -> bool {
        false
    }
}

/// Replays a fixed list of answers in order.
pub struct ScriptedResponder {
    answers: Mutex<VecDeque<bool>>,
}

impl ScriptedResponder {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    /// Parse a compact answer string such as `"yynny"`.
    ///
    /// `y`/`1` agree, `n`/`0` disagree; whitespace and commas are ignored.
    /// Returns the first unrecognized character on failure.
    pub fn parse(script: &str) -> Result<Self, char> {
        let answers = script
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c.to_ascii_lowercase() {
                'y' | '1' => Ok(true),
                'n' | '0' => Ok(false),
                other => Err(other),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(answers))
    }
}

#[async_trait]
impl QuizResponder for ScriptedResponder {
    async fn respond(
        &self,
        _question: &Question,
        _number: usize,
        _total: usize,
    ) -> Result<QuizResponse, QuizResponderError> {
        let next = self
            .answers
            .lock()
            .map_err(|e| QuizResponderError::Io(e.to_string()))?
            .pop_front();
        match next {
            Some(true) => Ok(QuizResponse::Agree),
            Some(false) => Ok(QuizResponse::Disagree),
            None => Err(QuizResponderError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let responder = ScriptedResponder::parse("y n, Y 0 1").unwrap();
        let answers: Vec<bool> = responder.answers.lock().unwrap().iter().copied().collect();
        assert_eq!(answers, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ScriptedResponder::parse("yx").err(), Some('x'));
    }

    #[tokio::test]
    async fn test_scripted_exhausts() {
        let responder = ScriptedResponder::new([true]);
        let q = Question::new(1, "Economy", "Raise taxes?", 2);
        assert_eq!(
            responder.respond(&q, 1, 2).await.unwrap(),
            QuizResponse::Agree
        );
        assert_eq!(
            responder.respond(&q, 2, 2).await.unwrap_err(),
            QuizResponderError::Exhausted
        );
    }
}
