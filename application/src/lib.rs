//! Application layer for poligrade
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    access_gate::{AccessGate, GateDecision},
    audit_logger::{AuditEvent, AuditLogger, NoAuditLogger},
    officeholder_repository::{OfficeholderRepository, RepositoryError},
    question_source::{QuestionSource, QuestionSourceError, StaticQuestions},
    quiz_responder::{QuizResponder, QuizResponderError, QuizResponse, ScriptedResponder},
};
pub use use_cases::browse_roster::{
    BrowseRosterError, BrowseRosterInput, BrowseRosterOutput, BrowseRosterUseCase,
};
pub use use_cases::manage_roster::{ManageRosterError, ManageRosterUseCase};
pub use use_cases::run_quiz::{QuizRun, RunQuizError, RunQuizUseCase};
pub use use_cases::verify_access::{
    AccessError, AdminSession, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS,
    VerifyAccessUseCase,
};
