//! Console output formatter for grades listings and quiz results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use poligrade_application::{BrowseRosterOutput, QuizRun};
use poligrade_domain::{AlignmentLabel, OfficeholderRecord, PageLink, QuizOutcome};

/// Formats results as colored console text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a page of the grades listing
    pub fn format_roster(output: &BrowseRosterOutput, show_ids: bool) -> String {
        let page = &output.page;
        let mut text = String::new();

        text.push_str(&Self::header("Officeholder Grades"));
        text.push('\n');

        text.push_str(&Self::section_header("Summary"));
        for (label, count) in page.summary.iter() {
            text.push_str(&format!(
                "  {} {}\n",
                Self::colorize_label(label, &format!("{:<13}", label.label())),
                count
            ));
        }
        text.push_str(&format!(
            "  {} {}\n",
            format!("{:<13}", "Total").bold(),
            page.total_matched
        ));

        if page.is_empty() {
            let message = if page.total_matched == 0 {
                "No officeholders match these filters.".to_string()
            } else {
                format!(
                    "Page {} is past the end ({} pages).",
                    page.page_number, output.total_pages
                )
            };
            text.push_str(&format!("\n{}\n", message.yellow()));
            text.push_str(&Self::footer());
            return text;
        }

        let first = (page.page_number - 1) * page.page_size + 1;
        let last = first + page.records.len() - 1;
        text.push_str(&Self::section_header(&format!(
            "Showing {}-{} of {}",
            first, last, page.total_matched
        )));
        text.push_str(&Self::table(&page.records, show_ids));

        if output.total_pages > 1 {
            text.push_str(&format!(
                "\n{} {}\n",
                "Pages:".cyan().bold(),
                Self::page_links(&output.page_links, page.page_number)
            ));
        }

        text.push_str(&Self::footer());
        text
    }

    /// Format a record after an admin action
    pub fn format_record(action: &str, record: &OfficeholderRecord) -> String {
        let mut text = format!("{} {}\n", format!("{}:", action).green().bold(), record.name);
        text.push_str(&Self::table(std::slice::from_ref(record), true));
        text
    }

    /// Format the quiz result screen
    pub fn format_quiz_run(run: &QuizRun) -> String {
        match run {
            QuizRun::Completed { outcome, .. } => Self::format_outcome(outcome),
            QuizRun::Abandoned {
                answered,
                questions,
            } => format!(
                "{} after {} of {} questions. Run `poligrade quiz` to start over.\n",
                "Quiz abandoned".yellow().bold(),
                answered,
                questions
            ),
        }
    }

    /// Format the result screen for a completed quiz
    pub fn format_outcome(outcome: &QuizOutcome) -> String {
        let label = outcome.label;
        let mut text = String::new();

        text.push_str(&Self::header("Your Political Alignment"));
        text.push_str("\n\n");
        text.push_str(&format!(
            "{:^60}\n",
            Self::colorize_label(label, label.label()).bold()
        ));
        text.push_str(&format!("{:^60}\n\n", label.description()));
        text.push_str(&format!("{} {}\n", "Score:".cyan().bold(), outcome.score));
        text.push_str(&format!(
            "\n{} poligrade grades --grade {}\n",
            "See officeholders who share this grade:".dimmed(),
            label.label().to_lowercase()
        ));
        text.push_str(&Self::footer());
        text
    }

    /// Format the state code table
    pub fn format_states(states: &[(&'static str, &'static str)]) -> String {
        let mut text = Self::section_header("States");
        for (code, name) in states {
            text.push_str(&format!("  {}  {}\n", code.bold(), name));
        }
        text
    }

    fn table(records: &[OfficeholderRecord], show_ids: bool) -> String {
        let mut headers = vec!["Name", "State", "District", "Office", "Status", "Grade"];
        if show_ids {
            headers.insert(0, "ID");
        }

        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                let mut row = vec![
                    r.name.clone(),
                    r.state.as_str().to_string(),
                    r.district
                        .as_ref()
                        .map(|d| d.as_str().to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    r.office.label().to_string(),
                    r.status.label().to_string(),
                    r.grade.label().to_string(),
                ];
                if show_ids {
                    row.insert(0, r.id.to_string());
                }
                row
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut text = String::new();
        let header_line = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<w$}", h, w = *w))
            .collect::<Vec<_>>()
            .join("  ");
        text.push_str(&format!("{}\n", header_line.bold()));
        text.push_str(&format!(
            "{}\n",
            "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
        ));

        for (record, row) in records.iter().zip(&rows) {
            let grade_column = row.len() - 1;
            let line = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = Self::pad(cell, *w);
                    if i == grade_column {
                        Self::colorize_label(record.grade, &padded).to_string()
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            text.push_str(line.trim_end());
            text.push('\n');
        }

        text
    }

    fn page_links(links: &[PageLink], current: usize) -> String {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page(n) if *n == current => format!("[{}]", n).bold().to_string(),
                PageLink::Page(n) => n.to_string(),
                PageLink::Gap => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn pad(cell: &str, width: usize) -> String {
        let len = cell.chars().count();
        format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
    }

    /// Color used for a label throughout the console output
    pub fn colorize_label(label: AlignmentLabel, text: &str) -> ColoredString {
        match label {
            AlignmentLabel::Progressive => text.blue(),
            AlignmentLabel::Liberal => text.cyan(),
            AlignmentLabel::Centrist => text.green(),
            AlignmentLabel::Moderate => text.yellow(),
            AlignmentLabel::Conservative => text.red(),
            AlignmentLabel::Nationalist => text.magenta(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_roster(&self, output: &BrowseRosterOutput, show_ids: bool) -> String {
        Self::format_roster(output, show_ids)
    }

    fn format_record(&self, action: &str, record: &OfficeholderRecord) -> String {
        Self::format_record(action, record)
    }

    fn format_quiz_run(&self, run: &QuizRun) -> String {
        Self::format_quiz_run(run)
    }

    fn format_states(&self, states: &[(&'static str, &'static str)]) -> String {
        Self::format_states(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poligrade_domain::{
        FilterSortSpec, Office, OfficeholderDraft, OfficeholderId, StateCode, page_window, query,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn browse(records: &[OfficeholderRecord], spec: &FilterSortSpec) -> BrowseRosterOutput {
        let page = query(records, spec);
        let total_pages = page.total_pages();
        BrowseRosterOutput {
            page_links: page_window(page.page_number, total_pages),
            total_pages,
            page,
        }
    }

    fn records(n: usize) -> Vec<OfficeholderRecord> {
        (1..=n)
            .map(|i| {
                OfficeholderDraft::new(
                    format!("Member {}", i),
                    StateCode::parse("TX").unwrap(),
                    Office::HouseRepresentative,
                    AlignmentLabel::Moderate,
                )
                .with_district(i.to_string())
                .into_record(OfficeholderId::new(i.to_string()))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_roster_table() {
        plain();
        let output = browse(&records(3), &FilterSortSpec::default());
        let text = ConsoleFormatter::format_roster(&output, false);

        assert!(text.contains("Officeholder Grades"));
        assert!(text.contains("Showing 1-3 of 3"));
        assert!(text.contains("Member 2"));
        assert!(text.contains("House Representative"));
        assert!(!text.contains("Pages:"));
        assert!(!text.contains("ID"));
    }

    #[test]
    fn test_roster_page_links() {
        plain();
        let spec = FilterSortSpec::default().with_page_size(2).page(4);
        let output = browse(&records(20), &spec);
        let text = ConsoleFormatter::format_roster(&output, true);

        assert!(text.contains("Showing 7-8 of 20"));
        assert!(text.contains("Pages: 1 ... 3 [4] 5 ... 10"));
        assert!(text.contains("ID"));
    }

    #[test]
    fn test_empty_roster() {
        plain();
        let output = browse(&[], &FilterSortSpec::default());
        let text = ConsoleFormatter::format_roster(&output, false);
        assert!(text.contains("No officeholders match these filters."));
    }

    #[test]
    fn test_quiz_result_screen() {
        plain();
        let run = QuizRun::Completed {
            outcome: QuizOutcome::from_score(7),
            questions: 10,
        };
        let text = ConsoleFormatter::format_quiz_run(&run);

        assert!(text.contains("Liberal"));
        assert!(text.contains(AlignmentLabel::Liberal.description()));
        assert!(text.contains("Score: 7"));
        assert!(text.contains("poligrade grades --grade liberal"));
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(ConsoleFormatter::pad("Peña", 6), "Peña  ");
    }
}
