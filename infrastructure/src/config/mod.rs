//! Configuration file loading for poligrade
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLIGRADE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./poligrade.toml` or `./.poligrade.toml`
//! 4. Global: `$XDG_CONFIG_HOME/poligrade/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileAuthConfig, FileConfig, FileDataConfig,
    FileLoggingConfig, FileOutputConfig, FileRosterConfig, Severity,
};
pub use loader::ConfigLoader;
