//! Output format value object

use serde::{Deserialize, Serialize};

/// How listings and quiz results are rendered
///
/// This is a domain concept shared by the config file and the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored console tables (default)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
