//! Presentation-level configuration
//!
//! Resolves how output is rendered from the CLI flags and the `[output]`
//! config section.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use poligrade_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// A `-o` flag overrides the configured format
    pub fn with_cli_override(mut self, format: Option<CliOutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format.into();
        }
        self
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the color setting process-wide. JSON output is never colored.
    pub fn apply(&self) {
        if !self.color || self.is_json() {
            colored::control::set_override(false);
        }
    }
}
