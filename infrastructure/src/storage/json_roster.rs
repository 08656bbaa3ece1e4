//! JSON file-backed officeholder store.
//!
//! The whole roster lives in memory behind a [`RwLock`]; every mutation
//! rewrites the file atomically (temp file + rename) before the in-memory
//! copy is replaced, so a failed write leaves both unchanged.

use async_trait::async_trait;
use poligrade_application::ports::officeholder_repository::{
    OfficeholderRepository, RepositoryError,
};
use poligrade_domain::{OfficeholderDraft, OfficeholderId, OfficeholderRecord};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Officeholder repository persisted as a JSON array
pub struct JsonOfficeholderStore {
    path: PathBuf,
    records: RwLock<Vec<OfficeholderRecord>>,
}

impl JsonOfficeholderStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty roster; it is created on the first write.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let records = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<Vec<OfficeholderRecord>>(&content)
                .map_err(|e| RepositoryError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No roster at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        debug!("Loaded {} officeholders from {}", records.len(), path.display());
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One past the largest numeric id; non-numeric ids are ignored.
    fn next_id(records: &[OfficeholderRecord]) -> OfficeholderId {
        let max = records
            .iter()
            .filter_map(|r| r.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        OfficeholderId::new((max + 1).to_string())
    }

    async fn persist(&self, records: &[OfficeholderRecord]) -> Result<(), RepositoryError> {
        let storage =
            |e: std::io::Error| RepositoryError::Storage(format!("{}: {}", self.path.display(), e));

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(storage)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await.map_err(storage)?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(storage(e));
        }
        debug!("Wrote {} officeholders to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl OfficeholderRepository for JsonOfficeholderStore {
    async fn list_all(&self) -> Result<Vec<OfficeholderRecord>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    async fn create(
        &self,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, RepositoryError> {
        let mut records = self.records.write().await;
        let record = draft.into_record(Self::next_id(&records))?;

        let mut next = records.clone();
        next.push(record.clone());
        self.persist(&next).await?;
        *records = next;

        Ok(record)
    }

    async fn update(
        &self,
        id: &OfficeholderId,
        draft: OfficeholderDraft,
    ) -> Result<OfficeholderRecord, RepositoryError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        let record = draft.into_record(id.clone())?;

        let mut next = records.clone();
        next[index] = record.clone();
        self.persist(&next).await?;
        *records = next;

        Ok(record)
    }

    async fn delete(&self, id: &OfficeholderId) -> Result<OfficeholderRecord, RepositoryError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

        let mut next = records.clone();
        let removed = next.remove(index);
        self.persist(&next).await?;
        *records = next;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poligrade_domain::{AlignmentLabel, Office, StateCode, Status};

    fn draft(name: &str) -> OfficeholderDraft {
        OfficeholderDraft::new(
            name,
            StateCode::parse("OR").unwrap(),
            Office::Senator,
            AlignmentLabel::Liberal,
        )
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonOfficeholderStore::open(dir.path().join("politicians.json"))
            .await
            .unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_next_integer_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("politicians.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"[{"id":"7","name":"Ron Wyden","state":"OR","office":"SENATOR","grade":"LIBERAL"}]"#,
        )
        .unwrap();

        let store = JsonOfficeholderStore::open(&path).await.unwrap();
        let created = store.create(draft("Jeff Merkley")).await.unwrap();
        assert_eq!(created.id, OfficeholderId::new("8"));

        let reopened = JsonOfficeholderStore::open(&path).await.unwrap();
        let records = reopened.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, Status::None);
        assert_eq!(records[1].name, "Jeff Merkley");
        assert!(!dir.path().join("data").join("politicians.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("politicians.json");
        let store = JsonOfficeholderStore::open(&path).await.unwrap();

        let created = store.create(draft("Jane Doe")).await.unwrap();
        let updated = store
            .update(&created.id, draft("Jane Q. Doe").with_status(Status::Candidate))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, Status::Candidate);
        assert_eq!(store.get(&created.id).await.unwrap().name, "Jane Q. Doe");

        let removed = store.delete(&created.id).await.unwrap();
        assert_eq!(removed.name, "Jane Q. Doe");
        assert!(matches!(
            store.get(&created.id).await,
            Err(RepositoryError::NotFound(_))
        ));

        let reopened = JsonOfficeholderStore::open(&path).await.unwrap();
        assert!(reopened.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonOfficeholderStore::open(dir.path().join("p.json"))
            .await
            .unwrap();

        let result = store.create(draft(" ")).await;
        assert!(matches!(result, Err(RepositoryError::Invalid(_))));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("politicians.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonOfficeholderStore::open(&path).await;
        assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
    }

    #[test]
    fn test_next_id_ignores_non_numeric() {
        let records = vec![
            draft("A").into_record(OfficeholderId::new("abc")).unwrap(),
            draft("B").into_record(OfficeholderId::new("41")).unwrap(),
        ];
        assert_eq!(
            JsonOfficeholderStore::next_id(&records),
            OfficeholderId::new("42")
        );
    }
}
