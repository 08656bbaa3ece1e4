//! Congressional district value object and its sort key.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A non-empty district designation such as `"12"` or `"At-Large"`.
///
/// Absence of a district is modelled as `Option<District>::None`; a blank
/// string never becomes a `District`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct District(String);

/// Ordering key for districts: numbered seats ascending, then at-large.
///
/// Designations without a leading number that are not literally
/// "At-Large" are ranked with at-large seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DistrictKey {
    Number(u64),
    AtLarge,
}

impl District {
    pub const AT_LARGE: &'static str = "At-Large";

    /// Wrap a designation, returning `None` for blank input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(District(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_at_large(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::AT_LARGE)
    }

    /// Leading integer of the designation, if any (`"12th"` → 12)
    pub fn number(&self) -> Option<u64> {
        let digits: String = self.0.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    pub fn sort_key(&self) -> DistrictKey {
        match self.number() {
            Some(n) => DistrictKey::Number(n),
            None => DistrictKey::AtLarge,
        }
    }

    /// Case-insensitive substring match against the designation
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for District {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        District::new(raw).ok_or_else(|| serde::de::Error::custom("district cannot be blank"))
    }
}

/// Deserialize an optional district, mapping `null`, a missing field, or a
/// blank string to `None`. Numeric JSON values are accepted as well.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<District>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => District::new(s),
        Some(Raw::Number(n)) => District::new(n.to_string()),
        None => None,
    })
}
