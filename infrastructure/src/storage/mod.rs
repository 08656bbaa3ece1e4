//! File-backed storage adapters.

mod json_questions;
mod json_roster;

pub use json_questions::JsonQuestionSource;
pub use json_roster::JsonOfficeholderStore;
