//! Admin access configuration from TOML (`[auth]` section)

use poligrade_application::DEFAULT_SESSION_TTL_HOURS;
use serde::{Deserialize, Serialize};

/// Raw auth configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Site password. Takes precedence over `password_env`.
    pub password: Option<String>,
    /// Environment variable consulted when `password` is unset
    pub password_env: String,
    /// Lifetime of an admin session
    pub session_ttl_hours: u64,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            password: None,
            password_env: "SITE_PASSWORD".to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

impl FileAuthConfig {
    /// The configured password, falling back to `$password_env`.
    ///
    /// Blank values count as unset.
    pub fn resolve_password(&self) -> Option<String> {
        self.password
            .clone()
            .or_else(|| std::env::var(&self.password_env).ok())
            .filter(|p| !p.trim().is_empty())
    }
}
