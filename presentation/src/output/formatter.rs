//! Output formatter trait

use poligrade_application::{BrowseRosterOutput, QuizRun};
use poligrade_domain::OfficeholderRecord;

/// Trait for rendering use case results
pub trait OutputFormatter {
    /// A page of the grades listing. `show_ids` adds the record id column.
    fn format_roster(&self, output: &BrowseRosterOutput, show_ids: bool) -> String;

    /// A single record after an admin action (`"Created"`, `"Deleted"`, ...)
    fn format_record(&self, action: &str, record: &OfficeholderRecord) -> String;

    /// Result screen for a quiz run
    fn format_quiz_run(&self, run: &QuizRun) -> String;

    /// State codes and names
    fn format_states(&self, states: &[(&'static str, &'static str)]) -> String;
}
