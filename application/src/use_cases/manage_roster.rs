//! Manage Roster use case.
//!
//! Create, update and delete officeholder records from the admin surface.
//! Every operation takes an [`AdminSession`], which only
//! [`VerifyAccessUseCase`](super::verify_access::VerifyAccessUseCase) can
//! produce, and records an audit event on success.

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::officeholder_repository::{OfficeholderRepository, RepositoryError};
use crate::use_cases::verify_access::{AccessError, AdminSession};
use poligrade_domain::{DomainError, OfficeholderDraft, OfficeholderId, OfficeholderRecord};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during admin roster operations
#[derive(Error, Debug)]
pub enum ManageRosterError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Invalid officeholder: {0}")]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for admin CRUD on the roster
pub struct ManageRosterUseCase {
    repository: Arc<dyn OfficeholderRepository>,
    audit: Arc<dyn AuditLogger>,
}

impl ManageRosterUseCase {
    pub fn new(repository: Arc<dyn OfficeholderRepository>) -> Self {
        Self {
            repository,
            audit: Arc::new(NoAuditLogger),
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub async fn get(
        &self,
        session: &AdminSession,
        id: &OfficeholderId,
    ) -> Result<OfficeholderRecord, ManageRosterError> {
        session.ensure_valid()?;
        Ok(self.repository.get(id).await?)
    }

    pub async fn create(
        &self,
        session: &AdminSession,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, ManageRosterError> {
        session.ensure_valid()?;
        draft.validate()?;

        let record = self.repository.create(draft).await?;
        info!("Created officeholder {} ({})", record.id, record.name);
        self.audit.log(AuditEvent::new(
            "officeholder_created",
            json!({ "id": record.id, "record": record }),
        ));
        Ok(record)
    }

    /// Replace every field of an existing record.
    pub async fn update(
        &self,
        session: &AdminSession,
        id: &OfficeholderId,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, ManageRosterError> {
        session.ensure_valid()?;
        draft.validate()?;

        let before = self.repository.get(id).await?;
        let record = self.repository.update(id, draft).await?;
        info!("Updated officeholder {} ({})", record.id, record.name);
        self.audit.log(AuditEvent::new(
            "officeholder_updated",
            json!({ "id": record.id, "before": before, "after": record }),
        ));
        Ok(record)
    }

    pub async fn delete(
        &self,
        session: &AdminSession,
        id: &OfficeholderId,
    ) -> Result<OfficeholderRecord, ManageRosterError> {
        session.ensure_valid()?;

        let removed = self.repository.delete(id).await?;
        info!("Deleted officeholder {} ({})", removed.id, removed.name);
        self.audit.log(AuditEvent::new(
            "officeholder_deleted",
            json!({ "id": removed.id, "record": removed }),
        ));
        Ok(removed)
    }
}
