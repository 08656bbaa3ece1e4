//! Roster listing configuration from TOML (`[roster]` section)

use poligrade_domain::roster::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Raw roster configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// Rows per page when `--page-size` is not given
    pub page_size: usize,
}

impl Default for FileRosterConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
