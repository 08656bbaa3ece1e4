//! Use cases for the application layer
//!
//! Each use case owns its collaborators as `Arc<dyn Port>` and exposes an
//! `execute`-style entry point.

pub mod browse_roster;
pub mod manage_roster;
pub mod run_quiz;
pub mod verify_access;

#[cfg(test)]
pub(crate) mod test_support;
