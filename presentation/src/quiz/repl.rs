//! Interactive quiz prompt

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{NoProgress, ProgressReporter, QuizProgress, SimpleProgress};
use async_trait::async_trait;
use colored::Colorize;
use poligrade_application::{
    QuizResponder, QuizResponderError, QuizResponse, QuizRun, RunQuizError, RunQuizUseCase,
};
use poligrade_domain::{Question, QuizOutcome};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::IsTerminal;

/// What a line typed at the quiz prompt means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Answer(QuizResponse),
    Help,
}

/// Interpret a line of input. `None` for anything unrecognized.
pub fn parse_reply(line: &str) -> Option<Reply> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Reply::Answer(QuizResponse::Agree)),
        "n" | "no" => Some(Reply::Answer(QuizResponse::Disagree)),
        "/quit" | "/exit" | "/q" => Some(Reply::Answer(QuizResponse::Quit)),
        "/help" | "/h" | "/?" => Some(Reply::Help),
        _ => None,
    }
}

/// Interactive quiz REPL
pub struct QuizRepl {
    use_case: RunQuizUseCase,
    show_progress: bool,
}

impl QuizRepl {
    pub fn new(use_case: RunQuizUseCase) -> Self {
        Self {
            use_case,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the quiz until it completes without a retake, or the user quits.
    ///
    /// Each completed pass prints its result screen before offering a retake.
    pub async fn run(&self) -> Result<QuizRun, RunQuizError> {
        print_welcome();

        let progress: Box<dyn QuizProgress> =
            match (self.show_progress, std::io::stderr().is_terminal()) {
                (false, _) => Box::new(NoProgress),
                (true, true) => Box::new(ProgressReporter::new()),
                (true, false) => Box::new(SimpleProgress),
            };
        let prompt = InteractivePrompt { progress };

        self.use_case.execute(&prompt).await
    }
}

fn print_welcome() {
    println!();
    println!("╭─────────────────────────────────────────────╮");
    println!("│        PoliGrade - Political Alignment      │");
    println!("╰─────────────────────────────────────────────╯");
    println!();
    println!("Answer each statement with y (yes) or n (no).");
    print_help();
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  y, yes           - Agree");
    println!("  n, no            - Disagree");
    println!("  /help, /h, /?    - Show this help");
    println!("  /quit, /exit, /q - Leave the quiz");
    println!();
}

fn io_error(err: ReadlineError) -> QuizResponderError {
    QuizResponderError::Io(err.to_string())
}

/// Terminal-backed [`QuizResponder`]
struct InteractivePrompt {
    progress: Box<dyn QuizProgress>,
}

#[async_trait]
impl QuizResponder for InteractivePrompt {
    async fn respond(
        &self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> Result<QuizResponse, QuizResponderError> {
        println!();
        let heading = format!("Question {} of {}", number, total);
        if question.issue_area.is_empty() {
            println!("{}", heading.cyan().bold());
        } else {
            println!(
                "{} {}",
                heading.cyan().bold(),
                format!("({})", question.issue_area).dimmed()
            );
        }
        println!("{}", question.prompt);

        let mut rl = DefaultEditor::new().map_err(io_error)?;
        loop {
            match rl.readline("[y/n] > ") {
                Ok(line) => match parse_reply(&line) {
                    Some(Reply::Answer(response)) => return Ok(response),
                    Some(Reply::Help) => print_help(),
                    None => println!("Please answer y or n (/quit to leave)"),
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    return Ok(QuizResponse::Quit);
                }
                Err(ReadlineError::Eof) => return Ok(QuizResponse::Quit),
                Err(err) => return Err(io_error(err)),
            }
        }
    }

    fn on_start(&self, total: usize) {
        self.progress.on_start(total);
    }

    fn on_progress(&self, answered: usize, percent: u8) {
        self.progress.on_answer(answered, percent);
    }

    fn on_complete(&self, outcome: &QuizOutcome) {
        self.progress.on_finish();
        println!();
        println!("{}", ConsoleFormatter::format_outcome(outcome));
    }

    fn offer_retake(&self, _outcome: &QuizOutcome) -> bool {
        let Ok(mut rl) = DefaultEditor::new() else {
            return false;
        };
        matches!(
            rl.readline("Take the quiz again? [y/N] > ")
                .map(|line| parse_reply(&line)),
            Ok(Some(Reply::Answer(QuizResponse::Agree)))
        )
    }
}
