//! Progress reporting while the quiz is being taken

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Receives quiz progress from the interactive prompt
pub trait QuizProgress: Send + Sync {
    fn on_start(&self, total: usize);
    fn on_answer(&self, answered: usize, percent: u8);
    fn on_finish(&self);
}

/// Reports progress with an indicatif bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgress for ProgressReporter {
    fn on_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Quiz");
        pb.set_message("0%");
        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_answer(&self, answered: usize, percent: u8) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_position(answered as u64);
            pb.set_message(format!("{}%", percent));
        }
    }

    fn on_finish(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{}", "complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QuizProgress for SimpleProgress {
    fn on_start(&self, total: usize) {
        println!("{} {} ({} questions)", "->".cyan(), "Quiz".bold(), total);
    }

    fn on_answer(&self, answered: usize, percent: u8) {
        println!("  {} {} answered ({}%)", "v".green(), answered, percent);
    }

    fn on_finish(&self) {
        println!();
    }
}

/// Progress sink for `--quiet`
pub struct NoProgress;

impl QuizProgress for NoProgress {
    fn on_start(&self, _total: usize) {}
    fn on_answer(&self, _answered: usize, _percent: u8) {}
    fn on_finish(&self) {}
}
