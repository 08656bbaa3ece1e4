//! Office and status enums with their storage codes and display labels.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elected office held or sought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Office {
    #[serde(alias = "Governor")]
    Governor,
    #[serde(alias = "Senator")]
    Senator,
    #[serde(alias = "House Representative")]
    HouseRepresentative,
}

impl Office {
    pub const ALL: [Office; 3] = [Office::Governor, Office::Senator, Office::HouseRepresentative];

    /// Canonical storage code
    pub fn code(&self) -> &'static str {
        match self {
            Office::Governor => "GOVERNOR",
            Office::Senator => "SENATOR",
            Office::HouseRepresentative => "HOUSE_REPRESENTATIVE",
        }
    }

    /// Human display label
    pub fn label(&self) -> &'static str {
        match self {
            Office::Governor => "Governor",
            Office::Senator => "Senator",
            Office::HouseRepresentative => "House Representative",
        }
    }

    /// Only House seats are tied to a district
    pub fn has_district(&self) -> bool {
        matches!(self, Office::HouseRepresentative)
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Office {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "governor" | "gov" => Ok(Office::Governor),
            "senator" | "senate" => Ok(Office::Senator),
            "house_representative" | "house representative" | "house-representative"
            | "house" | "representative" | "rep" => Ok(Office::HouseRepresentative),
            _ => Err(DomainError::UnknownOffice(s.to_string())),
        }
    }
}

/// Electoral status of an officeholder record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[serde(alias = "Incumbent")]
    Incumbent,
    #[serde(alias = "Candidate")]
    Candidate,
    #[default]
    #[serde(alias = "None")]
    None,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Incumbent, Status::Candidate, Status::None];

    pub fn code(&self) -> &'static str {
        match self {
            Status::Incumbent => "INCUMBENT",
            Status::Candidate => "CANDIDATE",
            Status::None => "NONE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Incumbent => "Incumbent",
            Status::Candidate => "Candidate",
            Status::None => "None",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|st| st.code().eq_ignore_ascii_case(wanted) || st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
