//! Site password access gate.

use crate::config::FileAuthConfig;
use poligrade_application::ports::access_gate::{AccessGate, GateDecision};
use subtle::ConstantTimeEq;

/// Compares a candidate against the single shared site password.
///
/// With no password configured the gate stays [`GateDecision::Open`].
pub struct SitePasswordGate {
    password: Option<String>,
}

impl SitePasswordGate {
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.filter(|p| !p.is_empty()),
        }
    }

    /// Build from `[auth]`, consulting `password_env` when `password` is unset.
    pub fn from_config(config: &FileAuthConfig) -> Self {
        Self::new(config.resolve_password())
    }

    pub fn is_open(&self) -> bool {
        self.password.is_none()
    }
}

impl AccessGate for SitePasswordGate {
    fn check(&self, candidate: Option<&str>) -> GateDecision {
        let Some(expected) = &self.password else {
            return GateDecision::Open;
        };
        match candidate {
            Some(candidate) if bool::from(expected.as_bytes().ct_eq(candidate.as_bytes())) => {
                GateDecision::Granted
            }
            _ => GateDecision::Denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_without_password() {
        let gate = SitePasswordGate::new(None);
        assert!(gate.is_open());
        assert_eq!(gate.check(None), GateDecision::Open);
        assert_eq!(gate.check(Some("anything")), GateDecision::Open);
    }

    #[test]
    fn test_empty_password_is_open() {
        assert!(SitePasswordGate::new(Some(String::new())).is_open());
    }

    #[test]
    fn test_matching_password() {
        let gate = SitePasswordGate::new(Some("letmein".to_string()));
        assert_eq!(gate.check(Some("letmein")), GateDecision::Granted);
    }

    #[test]
    fn test_wrong_or_missing_password() {
        let gate = SitePasswordGate::new(Some("letmein".to_string()));
        assert_eq!(gate.check(Some("letmeout")), GateDecision::Denied);
        assert_eq!(gate.check(Some("letmein ")), GateDecision::Denied);
        assert_eq!(gate.check(None), GateDecision::Denied);
    }

    #[test]
    fn test_from_config() {
        let config = FileAuthConfig {
            password: Some("pw".to_string()),
            ..Default::default()
        };
        let gate = SitePasswordGate::from_config(&config);
        assert_eq!(gate.check(Some("pw")), GateDecision::Granted);
    }
}
