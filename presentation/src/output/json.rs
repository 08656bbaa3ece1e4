//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use poligrade_application::{BrowseRosterOutput, QuizRun};
use poligrade_domain::OfficeholderRecord;
use serde::Serialize;
use serde_json::json;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_roster(&self, output: &BrowseRosterOutput, _show_ids: bool) -> String {
        Self::to_json(output)
    }

    fn format_record(&self, action: &str, record: &OfficeholderRecord) -> String {
        Self::to_json(&json!({ "action": action.to_lowercase(), "record": record }))
    }

    fn format_quiz_run(&self, run: &QuizRun) -> String {
        match run.outcome() {
            Some(outcome) => Self::to_json(&json!({
                "status": "completed",
                "score": outcome.score,
                "label": outcome.label.label(),
                "code": outcome.label,
                "description": outcome.label.description(),
            })),
            None => Self::to_json(run),
        }
    }

    fn format_states(&self, states: &[(&'static str, &'static str)]) -> String {
        let states: Vec<_> = states
            .iter()
            .map(|(code, name)| json!({ "code": code, "name": name }))
            .collect();
        Self::to_json(&states)
    }
}
