//! Officeholder repository port
//!
//! Defines the interface the roster use cases use to read and mutate the
//! persisted officeholder records. The JSON file store in the infrastructure
//! layer is the production adapter.

use async_trait::async_trait;
use poligrade_domain::{DomainError, OfficeholderDraft, OfficeholderId, OfficeholderRecord};
use thiserror::Error;

/// Errors that can occur while talking to the roster store
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Officeholder not found: {0}")]
    NotFound(OfficeholderId),

    #[error("Invalid officeholder: {0}")]
    Invalid(#[from] DomainError),

    #[error("Roster data is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Gateway to the persisted roster
///
/// `list_all` returns an owned snapshot; the query engine never sees the
/// store itself. Mutations return the record as stored.
#[async_trait]
pub trait OfficeholderRepository: Send + Sync {
    /// Full scan of every stored record, in storage order
    async fn list_all(&self) -> Result<Vec<OfficeholderRecord>, RepositoryError>;

    /// Look up a single record
    async fn get(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError>;

    /// Store a new record under a freshly assigned id
    async fn create(&self, draft: OfficeholderDraft)
    -> Result<OfficeholderRecord, RepositoryError>;

    /// Replace every field of an existing record
    async fn update(
        &self,
        id: &OfficeholderId,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, RepositoryError>;

    /// Remove a record, returning what was removed
    async fn delete(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError>;
}
