//! Infrastructure layer for poligrade
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use auth::SitePasswordGate;
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileAuthConfig, FileConfig, FileDataConfig,
    FileLoggingConfig, FileOutputConfig, FileRosterConfig, Severity,
};
pub use logging::JsonlAuditLogger;
pub use storage::{JsonOfficeholderStore, JsonQuestionSource};
