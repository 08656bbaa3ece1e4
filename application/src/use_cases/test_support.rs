//! In-memory ports shared by the use case tests.

use crate::ports::officeholder_repository::{OfficeholderRepository, RepositoryError};
use async_trait::async_trait;
use poligrade_domain::{
    AlignmentLabel, Office, OfficeholderDraft, OfficeholderId, OfficeholderRecord, StateCode,
};
use std::sync::Mutex;

pub(crate) fn record(
    id: &str,
    name: &str,
    state: &str,
    office: Office,
    grade: AlignmentLabel,
) -> OfficeholderRecord {
    OfficeholderDraft::new(name, StateCode::parse(state).unwrap(), office, grade)
        .into_record(OfficeholderId::new(id))
        .unwrap()
}

#[derive(Default)]
pub(crate) struct MemoryRepository {
    records: Mutex<Vec<OfficeholderRecord>>,
    fail: bool,
}

impl MemoryRepository {
    pub(crate) fn with(records: Vec<OfficeholderRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<OfficeholderRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            Err(RepositoryError::Storage("disk on fire".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OfficeholderRepository for MemoryRepository {
    async fn list_all(&self) -> Result<Vec<OfficeholderRecord>, RepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn get(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError> {
        self.check()?;
        self.snapshot()
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    async fn create(
        &self,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let id = OfficeholderId::new((records.len() + 1).to_string());
        let record = draft.into_record(id)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &OfficeholderId,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        *slot = draft.into_record(id.clone())?;
        Ok(slot.clone())
    }

    async fn delete(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        Ok(records.remove(index))
    }
}
