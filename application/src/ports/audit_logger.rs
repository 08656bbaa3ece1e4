//! Port for structured audit logging.
//!
//! Defines the [`AuditLogger`] trait for recording admin activity (access
//! checks and roster mutations) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures who changed what in
//! a machine-readable format (JSONL).

use serde_json::Value;

/// A structured audit event.
///
/// The adapter stamps each event with a UTC timestamp when it is written.
pub struct AuditEvent {
    /// Event type identifier (e.g., "access_granted", "officeholder_created").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging audit events.
///
/// `log` is synchronous and infallible; a failed write must never abort the
/// mutation it describes.
pub trait AuditLogger: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
