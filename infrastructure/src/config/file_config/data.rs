//! Data file locations from TOML (`[data]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw data configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// JSON array of officeholder records
    pub politicians: PathBuf,
    /// JSON questionnaire
    pub questionnaire: PathBuf,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            politicians: PathBuf::from("data/politicians.json"),
            questionnaire: PathBuf::from("data/questionnaire.json"),
        }
    }
}
