//! Run Quiz use case.
//!
//! Loads the questionnaire, drives a [`QuizSession`] through it and asks a
//! [`QuizResponder`] for each answer.
//!
//! ```text
//! load questions ─▶ start ─▶ respond ─▶ answer ─┬─▶ next question
//!                     ▲                          └─▶ Complete ─▶ offer retake
//!                     └──────── restart ◀──────── yes ◀──┘
//! ```

use crate::ports::question_source::{QuestionSource, QuestionSourceError};
use crate::ports::quiz_responder::{QuizResponder, QuizResponderError, QuizResponse};
use poligrade_domain::{QuizError, QuizOutcome, QuizSession, QuizState};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the quiz
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error("Failed to load questionnaire: {0}")]
    Source(#[from] QuestionSourceError),

    #[error("Failed to read answer: {0}")]
    Responder(#[from] QuizResponderError),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// How a quiz run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizRun {
    Completed {
        #[serde(flatten)]
        outcome: QuizOutcome,
        questions: usize,
    },
    /// The user quit before answering every question
    Abandoned { answered: usize, questions: usize },
}

impl QuizRun {
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self {
            QuizRun::Completed { outcome, .. } => Some(*outcome),
            QuizRun::Abandoned { .. } => None,
        }
    }
}

/// Use case for taking the alignment quiz
pub struct RunQuizUseCase {
    source: Arc<dyn QuestionSource>,
}

impl RunQuizUseCase {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, responder: &dyn QuizResponder) -> Result<QuizRun, RunQuizError> {
        let questions = self.source.load_questions().await?;
        info!("Loaded {} quiz questions", questions.len());

        let mut session = QuizSession::new(questions);
        loop {
            let run = self.take(&mut session, responder).await?;
            match run {
                QuizRun::Completed { outcome, .. } if responder.offer_retake(&outcome) => {
                    debug!("Retaking quiz");
                    session.restart()?;
                }
                _ => return Ok(run),
            }
        }
    }

    async fn take(
        &self,
        session: &mut QuizSession,
        responder: &dyn QuizResponder,
    ) -> Result<QuizRun, RunQuizError> {
        let total = session.len();
        let mut state = session.start()?;
        responder.on_start(total);

        while let QuizState::InProgress { question_index, .. } = state {
            let question = session.current_question().ok_or(QuizError::NotStarted)?;
            let response = responder.respond(question, question_index + 1, total).await?;
            state = match response {
                QuizResponse::Agree => session.answer(true)?,
                QuizResponse::Disagree => session.answer(false)?,
                QuizResponse::Quit => {
                    session.abandon()?;
                    info!("Quiz abandoned after {} answers", question_index);
                    return Ok(QuizRun::Abandoned {
                        answered: question_index,
                        questions: total,
                    });
                }
            };
            responder.on_progress(session.answers().len(), session.progress_percent());
        }

        let outcome = session.outcome().ok_or(QuizError::NotComplete)?;
        info!("Quiz complete: score {} ({})", outcome.score, outcome.label);
        responder.on_complete(&outcome);
        Ok(QuizRun::Completed {
            outcome,
            questions: total,
        })
    }
}
