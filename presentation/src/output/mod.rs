//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

use formatter::OutputFormatter;
use poligrade_domain::OutputFormat;

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Table => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
