//! Score fold over a sequence of answers.

use super::question::Question;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// An agree/disagree response to the question at `question_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_index: usize,
    pub agree: bool,
}

impl Answer {
    pub fn agree(question_index: usize) -> Self {
        Self {
            question_index,
            agree: true,
        }
    }

    pub fn disagree(question_index: usize) -> Self {
        Self {
            question_index,
            agree: false,
        }
    }

    /// Pair each response with its position, as produced by an in-order traversal.
    pub fn sequence(responses: &[bool]) -> Vec<Answer> {
        responses
            .iter()
            .enumerate()
            .map(|(question_index, &agree)| Answer {
                question_index,
                agree,
            })
            .collect()
    }
}

/// Fold answers into a score: agree subtracts the question's weight,
/// disagree adds it.
///
/// Fails fast on an index outside `questions`, or when the running score
/// leaves the `i32` range.
///
/// # Example
///
/// ```
/// use poligrade_domain::{Answer, Question, score};
///
/// let questions = vec![
///     Question::new(1, "A", "a?", 10),
///     Question::new(2, "B", "b?", 5),
///     Question::new(3, "C", "c?", 20),
/// ];
/// let answers = Answer::sequence(&[true, false, true]);
/// assert_eq!(score(&answers, &questions).unwrap(), -25);
/// ```
pub fn score(answers: &[Answer], questions: &[Question]) -> Result<i32, DomainError> {
    answers.iter().try_fold(0i32, |acc, answer| {
        let question = questions.get(answer.question_index).ok_or(
            DomainError::QuestionIndexOutOfRange {
                index: answer.question_index,
                len: questions.len(),
            },
        )?;
        question
            .apply(acc, answer.agree)
            .ok_or(DomainError::ScoreOverflow {
                index: answer.question_index,
            })
    })
}
