//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod auth;
mod data;
mod logging;
mod output;
mod roster;

pub use auth::FileAuthConfig;
pub use data::FileDataConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use roster::FileRosterConfig;

use poligrade_application::MAX_SESSION_TTL_HOURS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("roster.page_size is 0; listings will show one record per page")]
    ZeroPageSize,

    #[error("auth.session_ttl_hours cannot be 0")]
    ZeroSessionTtl,

    #[error("auth.session_ttl_hours is {0}; the maximum is {max}", max = MAX_SESSION_TTL_HOURS)]
    SessionTtlTooLong(u64),

    #[error("auth.password_env is empty; only auth.password will be consulted")]
    EmptyPasswordEnv,

    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Data file locations
    pub data: FileDataConfig,
    /// Listing settings
    pub roster: FileRosterConfig,
    /// Admin access settings
    pub auth: FileAuthConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.data.politicians.as_os_str().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyPath(
                "data.politicians",
            )));
        }
        if self.data.questionnaire.as_os_str().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyPath(
                "data.questionnaire",
            )));
        }
        if self
            .logging
            .audit_log
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyPath(
                "logging.audit_log",
            )));
        }

        if self.roster.page_size == 0 {
            issues.push(ConfigIssue::warning(ConfigValidationError::ZeroPageSize));
        }

        if self.auth.session_ttl_hours == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroSessionTtl));
        } else if self.auth.session_ttl_hours > MAX_SESSION_TTL_HOURS {
            issues.push(ConfigIssue::error(
                ConfigValidationError::SessionTtlTooLong(self.auth.session_ttl_hours),
            ));
        }
        if self.auth.password_env.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigValidationError::EmptyPasswordEnv,
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poligrade_domain::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[data]
politicians = "/srv/poligrade/politicians.json"
questionnaire = "/srv/poligrade/questions.json"

[roster]
page_size = 25

[auth]
password = "s3cret"
session_ttl_hours = 24

[output]
format = "json"
color = false

[logging]
audit_log = "logs/audit.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.data.politicians,
            PathBuf::from("/srv/poligrade/politicians.json")
        );
        assert_eq!(config.roster.page_size, 25);
        assert_eq!(config.auth.password.as_deref(), Some("s3cret"));
        assert_eq!(config.auth.password_env, "SITE_PASSWORD");
        assert_eq!(config.auth.session_ttl_hours, 24);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(
            config.logging.audit_log,
            Some(PathBuf::from("logs/audit.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[roster]
page_size = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.roster.page_size, 10);
        // Defaults should apply
        assert_eq!(config.data, FileDataConfig::default());
        assert_eq!(config.auth.session_ttl_hours, 720);
        assert!(config.output.color);
        assert!(config.logging.audit_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let toml_str = r#"
[data]
politicians = ""

[roster]
page_size = 0

[auth]
session_ttl_hours = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&ConfigIssue::error(ConfigValidationError::EmptyPath(
            "data.politicians"
        ))));
        assert!(issues.contains(&ConfigIssue::warning(
            ConfigValidationError::ZeroPageSize
        )));
        assert!(issues.contains(&ConfigIssue::error(
            ConfigValidationError::ZeroSessionTtl
        )));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
    }

    #[test]
    fn test_validate_session_ttl_upper_bound() {
        let toml_str = r#"
[auth]
session_ttl_hours = 10000000000
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![ConfigIssue::error(ConfigValidationError::SessionTtlTooLong(
                10_000_000_000
            ))]
        );

        let mut at_limit = FileConfig::default();
        at_limit.auth.session_ttl_hours = MAX_SESSION_TTL_HOURS;
        assert!(at_limit.validate().is_empty());
    }
}
