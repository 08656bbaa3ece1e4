//! Verify Access use case.
//!
//! Turns a password check into an [`AdminSession`]. Every roster mutation in
//! [`ManageRosterUseCase`](super::manage_roster::ManageRosterUseCase) takes a
//! session by reference, and sessions can only be minted here, so an
//! unauthenticated mutation does not type-check.

use crate::ports::access_gate::{AccessGate, GateDecision};
use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default session lifetime (30 days)
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 720;

/// Longest session lifetime accepted (10 years)
pub const MAX_SESSION_TTL_HOURS: u64 = 87_600;

/// Errors raised when admin access is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Incorrect password")]
    Denied,

    #[error("Admin session expired at {0}")]
    Expired(DateTime<Utc>),

    #[error("Session lifetime of {0} hours is out of range (max {max})", max = MAX_SESSION_TTL_HOURS)]
    TtlOutOfRange(u64),
}

/// Proof that the caller passed the access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    granted_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    decision: GateDecision,
}

impl AdminSession {
    pub(crate) fn new(
        granted_at: DateTime<Utc>,
        ttl_hours: u64,
        decision: GateDecision,
    ) -> Result<Self, AccessError> {
        let expires_at = Some(ttl_hours)
            .filter(|h| *h <= MAX_SESSION_TTL_HOURS)
            .and_then(|h| i64::try_from(h).ok())
            .and_then(Duration::try_hours)
            .and_then(|ttl| granted_at.checked_add_signed(ttl))
            .ok_or(AccessError::TtlOutOfRange(ttl_hours))?;

        Ok(Self {
            granted_at,
            expires_at,
            decision,
        })
    }

    pub fn granted_at(&self) -> DateTime<Utc> {
        self.granted_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True when no password is configured (development mode)
    pub fn is_open_access(&self) -> bool {
        self.decision == GateDecision::Open
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Fails with [`AccessError::Expired`] once the lifetime has passed.
    pub fn ensure_valid(&self) -> Result<(), AccessError> {
        if self.is_valid_at(Utc::now()) {
            Ok(())
        } else {
            Err(AccessError::Expired(self.expires_at))
        }
    }
}

/// Use case for unlocking the admin surface
pub struct VerifyAccessUseCase {
    gate: Arc<dyn AccessGate>,
    audit: Arc<dyn AuditLogger>,
    ttl_hours: u64,
}

impl VerifyAccessUseCase {
    pub fn new(gate: Arc<dyn AccessGate>) -> Self {
        Self {
            gate,
            audit: Arc::new(NoAuditLogger),
            ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_session_ttl_hours(mut self, hours: u64) -> Self {
        self.ttl_hours = hours;
        self
    }

    pub fn execute(&self, password: Option<&str>) -> Result<AdminSession, AccessError> {
        let decision = self.gate.check(password);
        match decision {
            GateDecision::Denied => {
                warn!("Admin access denied");
                self.audit.log(AuditEvent::new("access_denied", json!({})));
                Err(AccessError::Denied)
            }
            GateDecision::Granted | GateDecision::Open => {
                let session = AdminSession::new(Utc::now(), self.ttl_hours, decision)?;
                if decision == GateDecision::Open {
                    warn!("No site password configured; admin access is open");
                } else {
                    info!("Admin access granted");
                }
                self.audit.log(AuditEvent::new(
                    "access_granted",
                    json!({
                        "open": session.is_open_access(),
                        "expires_at": session.expires_at().to_rfc3339(),
                    }),
                ));
                Ok(session)
            }
        }
    }
}
