//! Interactive quiz

pub mod repl;

pub use repl::QuizRepl;
