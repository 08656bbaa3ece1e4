//! Domain layer for poligrade
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns, and
//! nothing in it performs I/O.
//!
//! # Core Concepts
//!
//! ## Alignment
//!
//! A weighted yes/no quiz folds answers into a signed score, and fixed
//! thresholds map the score onto one of six ordered [`AlignmentLabel`]s.
//!
//! ## Roster
//!
//! Officeholder records graded with the same labels. The query engine
//! filters, sorts and paginates a read-only snapshot and reports per-label
//! counts for the matched set.

pub mod alignment;
pub mod config;
pub mod core;
pub mod roster;

// Re-export commonly used types
pub use alignment::{
    AlignmentLabel, Answer, Question, QuizError, QuizOutcome, QuizSession, QuizState, score,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use roster::{
    District, FilterSortSpec, GradeSummary, Office, OfficeholderDraft, OfficeholderId,
    OfficeholderRecord, PageLink, RosterPage, SortDirection, SortField, StateCode, Status,
    page_window, query, total_pages,
};
