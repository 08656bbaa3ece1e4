//! Presentation layer for poligrade
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz prompt.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{
    AdminAction, AdminArgs, Cli, Command, DraftArgs, OutputFormat, QuizArgs, RosterFilterArgs,
    UpdateArgs,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use progress::reporter::{NoProgress, ProgressReporter, QuizProgress, SimpleProgress};
pub use quiz::QuizRepl;
