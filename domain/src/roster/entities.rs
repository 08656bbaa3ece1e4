//! Officeholder entities

use super::district::{self, District};
use super::office::{Office, Status};
use super::state::StateCode;
use crate::alignment::AlignmentLabel;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeholderId(String);

impl OfficeholderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfficeholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OfficeholderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An elected official or candidate and their alignment grade (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeholderRecord {
    pub id: OfficeholderId,
    pub name: String,
    pub state: StateCode,
    #[serde(
        default,
        deserialize_with = "district::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub district: Option<District>,
    pub office: Office,
    #[serde(default)]
    pub status: Status,
    pub grade: AlignmentLabel,
}

impl OfficeholderRecord {
    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Admin form payload for creating or replacing a record.
///
/// Converted into a record by [`OfficeholderDraft::into_record`], which
/// enforces the required fields and normalizes the district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeholderDraft {
    pub name: String,
    pub state: StateCode,
    #[serde(default)]
    pub district: Option<String>,
    pub office: Office,
    #[serde(default)]
    pub status: Option<Status>,
    pub grade: AlignmentLabel,
}

impl OfficeholderDraft {
    pub fn new(
        name: impl Into<String>,
        state: StateCode,
        office: Office,
        grade: AlignmentLabel,
    ) -> Self {
        Self {
            name: name.into(),
            state,
            district: None,
            office,
            status: None,
            grade,
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Check the required fields without consuming the draft.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidRecord("name is required".to_string()));
        }
        Ok(())
    }

    /// Validate and build a record under the given id.
    ///
    /// - `name` must not be blank
    /// - `status` defaults to [`Status::None`]
    /// - a district on a statewide office is dropped; a blank one becomes `None`
    pub fn into_record(self, id: OfficeholderId) -> Result<OfficeholderRecord, DomainError> {
        self.validate()?;
        let name = self.name.trim().to_string();

        let district = if self.office.has_district() {
            self.district.and_then(District::new)
        } else {
            None
        };

        Ok(OfficeholderRecord {
            id,
            name,
            state: self.state,
            district,
            office: self.office,
            status: self.status.unwrap_or_default(),
            grade: self.grade,
        })
    }
}

impl From<&OfficeholderRecord> for OfficeholderDraft {
    fn from(record: &OfficeholderRecord) -> Self {
        Self {
            name: record.name.clone(),
            state: record.state.clone(),
            district: record.district.as_ref().map(|d| d.as_str().to_string()),
            office: record.office,
            status: Some(record.status),
            grade: record.grade,
        }
    }
}
