//! Quiz traversal state machine.
//!
//! ```text
//!  NotStarted ──start──▶ InProgress(i, s) ──answer──▶ InProgress(i+1, s')
//!      ▲                      │                            │
//!      │                   abandon                  answer (last)
//!      │                      ▼                            ▼
//!      └──────────restart──────────────────────── Complete(score, label)
//! ```
//!
//! Any other transition is rejected with a [`QuizError`].

use super::label::AlignmentLabel;
use super::question::Question;
use super::scoring::Answer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected quiz transitions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz has not been started")]
    NotStarted,

    #[error("Quiz is already in progress")]
    AlreadyStarted,

    #[error("Quiz is already complete; restart to take it again")]
    AlreadyComplete,

    #[error("Quiz can only be restarted once complete")]
    NotComplete,

    #[error("Score overflowed at question {0}")]
    ScoreOverflow(usize),
}

/// Final result of a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: i32,
    pub label: AlignmentLabel,
}

impl QuizOutcome {
    pub fn from_score(score: i32) -> Self {
        Self {
            score,
            label: AlignmentLabel::classify(score),
        }
    }
}

/// Current position in the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress { question_index: usize, score: i32 },
    Complete(QuizOutcome),
}

impl QuizState {
    pub fn is_complete(&self) -> bool {
        matches!(self, QuizState::Complete(_))
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, QuizState::InProgress { .. })
    }
}

/// One user's pass through a fixed question set.
///
/// # Example
///
/// ```
/// use poligrade_domain::{AlignmentLabel, Question, QuizSession};
///
/// let mut quiz = QuizSession::new(vec![Question::new(1, "Economy", "Raise taxes?", 20)]);
/// quiz.start().unwrap();
/// quiz.answer(false).unwrap();
///
/// let outcome = quiz.outcome().unwrap();
/// assert_eq!(outcome.score, 20);
/// assert_eq!(outcome.label, AlignmentLabel::Progressive);
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
            state: QuizState::NotStarted,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Answers recorded so far, in traversal order
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// NotStarted → InProgress(0, 0).
    ///
    /// An empty question set completes immediately with a score of 0.
    pub fn start(&mut self) -> Result<QuizState, QuizError> {
        match self.state {
            QuizState::NotStarted => {
                self.answers.clear();
                self.state = if self.questions.is_empty() {
                    QuizState::Complete(QuizOutcome::from_score(0))
                } else {
                    QuizState::InProgress {
                        question_index: 0,
                        score: 0,
                    }
                };
                Ok(self.state)
            }
            QuizState::InProgress { .. } => Err(QuizError::AlreadyStarted),
            QuizState::Complete(_) => Err(QuizError::AlreadyComplete),
        }
    }

    /// Apply one answer to the current question.
    pub fn answer(&mut self, agree: bool) -> Result<QuizState, QuizError> {
        let (question_index, score) = match self.state {
            QuizState::InProgress {
                question_index,
                score,
            } => (question_index, score),
            QuizState::NotStarted => return Err(QuizError::NotStarted),
            QuizState::Complete(_) => return Err(QuizError::AlreadyComplete),
        };

        let question = self
            .questions
            .get(question_index)
            .ok_or(QuizError::AlreadyComplete)?;
        let score = question
            .apply(score, agree)
            .ok_or(QuizError::ScoreOverflow(question_index + 1))?;
        self.answers.push(Answer {
            question_index,
            agree,
        });

        let next = question_index + 1;
        self.state = if next >= self.questions.len() {
            QuizState::Complete(QuizOutcome::from_score(score))
        } else {
            QuizState::InProgress {
                question_index: next,
                score,
            }
        };
        Ok(self.state)
    }

    /// Complete → NotStarted, discarding all answers.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::Complete(_) => {
                self.reset();
                Ok(())
            }
            QuizState::NotStarted | QuizState::InProgress { .. } => Err(QuizError::NotComplete),
        }
    }

    /// InProgress → NotStarted, for a user who walks away mid-quiz.
    pub fn abandon(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::InProgress { .. } => {
                self.reset();
                Ok(())
            }
            QuizState::NotStarted => Err(QuizError::NotStarted),
            QuizState::Complete(_) => Err(QuizError::AlreadyComplete),
        }
    }

    fn reset(&mut self) {
        self.answers.clear();
        self.state = QuizState::NotStarted;
    }

    /// Question awaiting an answer, if in progress
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { question_index, .. } => self.questions.get(question_index),
            _ => None,
        }
    }

    /// 1-based number of the current question
    pub fn question_number(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { question_index, .. } => Some(question_index + 1),
            _ => None,
        }
    }

    /// Share of questions answered, rounded to a whole percent
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            QuizState::NotStarted => 0,
            QuizState::Complete(_) => 100,
            QuizState::InProgress { question_index, .. } => {
                ((question_index as f64 / self.questions.len() as f64) * 100.0).round() as u8
            }
        }
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.state {
            QuizState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::scoring::score;

    fn quiz(weights: &[i32]) -> QuizSession {
        QuizSession::new(
            weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Question::new(i as u32 + 1, "Area", format!("Q{}", i + 1), w))
                .collect(),
        )
    }

    #[test]
    fn test_full_traversal() {
        let mut q = quiz(&[10, 5, 20]);
        assert_eq!(q.state(), QuizState::NotStarted);

        q.start().unwrap();
        assert_eq!(q.question_number(), Some(1));
        assert_eq!(
            q.answer(true).unwrap(),
            QuizState::InProgress {
                question_index: 1,
                score: -10
            }
        );
        q.answer(false).unwrap();
        let done = q.answer(true).unwrap();

        assert_eq!(
            done,
            QuizState::Complete(QuizOutcome {
                score: -25,
                label: AlignmentLabel::Nationalist
            })
        );
        assert_eq!(q.current_question(), None);
    }

    #[test]
    fn test_final_score_matches_fold() {
        let mut q = quiz(&[4, -7, 2, 9, 1]);
        q.start().unwrap();
        for agree in [false, true, true, false, false] {
            q.answer(agree).unwrap();
        }
        let folded = score(q.answers(), q.questions()).unwrap();
        assert_eq!(q.outcome().unwrap().score, folded);
    }

    #[test]
    fn test_answer_before_start_rejected() {
        let mut q = quiz(&[1]);
        assert_eq!(q.answer(true), Err(QuizError::NotStarted));
    }

    #[test]
    fn test_answer_after_complete_rejected() {
        let mut q = quiz(&[1]);
        q.start().unwrap();
        q.answer(true).unwrap();
        assert_eq!(q.answer(true), Err(QuizError::AlreadyComplete));
        assert_eq!(q.answers().len(), 1);
    }

    #[test]
    fn test_double_start_rejected() {
        let mut q = quiz(&[1, 2]);
        q.start().unwrap();
        assert_eq!(q.start(), Err(QuizError::AlreadyStarted));
    }

    #[test]
    fn test_restart_only_from_complete() {
        let mut q = quiz(&[1, 2]);
        assert_eq!(q.restart(), Err(QuizError::NotComplete));
        q.start().unwrap();
        q.answer(true).unwrap();
        assert_eq!(q.restart(), Err(QuizError::NotComplete));
        q.answer(true).unwrap();
        q.restart().unwrap();
        assert_eq!(q.state(), QuizState::NotStarted);
        assert!(q.answers().is_empty());
    }

    #[test]
    fn test_abandon_mid_quiz() {
        let mut q = quiz(&[1, 2]);
        assert_eq!(q.abandon(), Err(QuizError::NotStarted));
        q.start().unwrap();
        q.answer(false).unwrap();
        q.abandon().unwrap();
        assert_eq!(q.state(), QuizState::NotStarted);
        q.start().unwrap();
        assert_eq!(q.question_number(), Some(1));
    }

    #[test]
    fn test_empty_quiz_completes_on_start() {
        let mut q = quiz(&[]);
        let state = q.start().unwrap();
        assert_eq!(state, QuizState::Complete(QuizOutcome::from_score(0)));
        assert_eq!(q.outcome().unwrap().label, AlignmentLabel::Centrist);
    }

    #[test]
    fn test_progress_percent() {
        let mut q = quiz(&[1, 1, 1]);
        assert_eq!(q.progress_percent(), 0);
        q.start().unwrap();
        assert_eq!(q.progress_percent(), 0);
        q.answer(true).unwrap();
        assert_eq!(q.progress_percent(), 33);
        q.answer(true).unwrap();
        assert_eq!(q.progress_percent(), 67);
        q.answer(true).unwrap();
        assert_eq!(q.progress_percent(), 100);
    }

    #[test]
    fn test_overflowing_answer_leaves_state_unchanged() {
        let mut q = quiz(&[i32::MAX, 1]);
        q.start().unwrap();
        q.answer(false).unwrap();

        assert_eq!(q.answer(false), Err(QuizError::ScoreOverflow(2)));
        assert_eq!(
            q.state(),
            QuizState::InProgress {
                question_index: 1,
                score: i32::MAX
            }
        );
        assert_eq!(q.answers().len(), 1);

        q.answer(true).unwrap();
        assert_eq!(q.outcome().unwrap().score, i32::MAX - 1);
    }
}
