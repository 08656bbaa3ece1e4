//! Port definitions for the application layer
//!
//! Ports define the interfaces that the application layer expects
//! from the infrastructure and presentation layers.

pub mod access_gate;
pub mod audit_logger;
pub mod officeholder_repository;
pub mod question_source;
pub mod quiz_responder;
