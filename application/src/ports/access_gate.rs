//! Access gate port
//!
//! Answers whether a presented password unlocks the admin surface.
//!
//! # Decisions
//!
//! ```text
//! password configured?
//!   ├── no  ─────────────────────────▶ Open    (development mode)
//!   └── yes ── candidate matches? ──┬─▶ Granted
//!                                   └─▶ Denied
//! ```

/// Outcome of a password check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The candidate matched the configured password
    Granted,
    /// A password is configured and the candidate did not match
    Denied,
    /// No password is configured; everyone is let in
    Open,
}

impl GateDecision {
    /// Whether this decision lets the caller through
    pub fn allows(&self) -> bool {
        !matches!(self, GateDecision::Denied)
    }
}

/// Port for checking the admin password
///
/// Synchronous: implementations compare against a value already in memory.
pub trait AccessGate: Send + Sync {
    fn check(&self, candidate: Option<&str>) -> GateDecision;
}
