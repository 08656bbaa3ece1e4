//! Roster query engine: filter, sort, paginate, and summarize.

use super::entities::OfficeholderRecord;
use super::office::{Office, Status};
use super::pagination::total_pages;
use super::state::StateCode;
use crate::alignment::AlignmentLabel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Rows per page when the caller does not choose
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Column a roster listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    State,
    District,
    Office,
    Grade,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::State => write!(f, "state"),
            SortField::District => write!(f, "district"),
            SortField::Office => write!(f, "office"),
            SortField::Grade => write!(f, "grade"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "state" => Ok(SortField::State),
            "district" => Ok(SortField::District),
            "office" => Ok(SortField::Office),
            "grade" => Ok(SortField::Grade),
            _ => Err(format!(
                "Unknown sort field: {}. Valid: name, state, district, office, grade",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {}. Valid: asc, desc", s)),
        }
    }
}

/// Caller-supplied filters, ordering and page selection.
///
/// Every filter is optional; supplied filters are combined with AND.
///
/// # Example
///
/// ```
/// use poligrade_domain::{FilterSortSpec, Office, SortDirection, SortField};
///
/// let spec = FilterSortSpec::default()
///     .with_office(Office::Senator)
///     .sorted_by(SortField::Name, SortDirection::Descending);
/// assert_eq!(spec.page_number, 1);
/// assert_eq!(spec.page_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSortSpec {
    /// Case-insensitive substring of the name
    pub name_substring: Option<String>,
    pub state: Option<StateCode>,
    /// Case-insensitive substring of the district designation
    pub district_substring: Option<String>,
    /// `None` matches any office
    pub office: Option<Office>,
    pub status: Option<Status>,
    pub grade: Option<AlignmentLabel>,
    /// `None` keeps input order
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    /// 1-based; 0 is treated as 1
    pub page_number: usize,
    /// 0 is treated as 1
    pub page_size: usize,
}

impl Default for FilterSortSpec {
    fn default() -> Self {
        Self {
            name_substring: None,
            state: None,
            district_substring: None,
            office: None,
            status: None,
            grade: None,
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterSortSpec {
    // ==================== Builder Methods ====================

    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_substring = non_blank(needle.into());
        self
    }

    pub fn with_state(mut self, state: StateCode) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_district(mut self, needle: impl Into<String>) -> Self {
        self.district_substring = non_blank(needle.into());
        self
    }

    pub fn with_office(mut self, office: Office) -> Self {
        self.office = Some(office);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_grade(mut self, grade: AlignmentLabel) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = Some(field);
        self.sort_direction = direction;
        self
    }

    pub fn page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Same ordering and paging with every filter removed
    pub fn without_filters(&self) -> Self {
        Self {
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            page_number: self.page_number,
            page_size: self.page_size,
            ..Self::default()
        }
    }

    pub fn has_filters(&self) -> bool {
        self.name_substring.is_some()
            || self.state.is_some()
            || self.district_substring.is_some()
            || self.office.is_some()
            || self.status.is_some()
            || self.grade.is_some()
    }

    pub fn effective_page_number(&self) -> usize {
        self.page_number.max(1)
    }

    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Whether a record satisfies every supplied filter
    pub fn matches(&self, record: &OfficeholderRecord) -> bool {
        let name_ok = self
            .name_substring
            .as_deref()
            .is_none_or(|needle| record.name_contains(needle));
        let state_ok = self.state.as_ref().is_none_or(|s| *s == record.state);
        let district_ok = self.district_substring.as_deref().is_none_or(|needle| {
            record
                .district
                .as_ref()
                .is_some_and(|d| d.contains_ignore_case(needle))
        });
        let office_ok = self.office.is_none_or(|o| o == record.office);
        let status_ok = self.status.is_none_or(|s| s == record.status);
        let grade_ok = self.grade.is_none_or(|g| g == record.grade);

        name_ok && state_ok && district_ok && office_ok && status_ok && grade_ok
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Record counts per alignment label; always holds all six labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradeSummary(BTreeMap<AlignmentLabel, usize>);

impl GradeSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a OfficeholderRecord>) -> Self {
        let mut counts: BTreeMap<AlignmentLabel, usize> =
            AlignmentLabel::ALL.into_iter().map(|l| (l, 0)).collect();
        for record in records {
            *counts.entry(record.grade).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, label: AlignmentLabel) -> usize {
        self.0.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Counts in label order
    pub fn iter(&self) -> impl Iterator<Item = (AlignmentLabel, usize)> + '_ {
        self.0.iter().map(|(l, c)| (*l, *c))
    }
}

/// One page of a roster listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterPage {
    pub records: Vec<OfficeholderRecord>,
    /// Matches before pagination
    pub total_matched: usize,
    pub page_number: usize,
    pub page_size: usize,
    /// Counts over the filtered set, not just this page
    pub summary: GradeSummary,
}

impl RosterPage {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_matched, self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }
}

/// Run a query over a roster snapshot.
///
/// Filters, then stable-sorts when a sort field is set, then slices out the
/// requested page. A page past the end is empty, not an error.
pub fn query(records: &[OfficeholderRecord], spec: &FilterSortSpec) -> RosterPage {
    let mut matched: Vec<&OfficeholderRecord> = records.iter().filter(|r| spec.matches(r)).collect();
    let summary = GradeSummary::from_records(matched.iter().copied());

    if let Some(field) = spec.sort_field {
        matched.sort_by(|a, b| compare(a, b, field, spec.sort_direction));
    }

    let page_number = spec.effective_page_number();
    let page_size = spec.effective_page_size();
    let start = (page_number - 1).saturating_mul(page_size);

    RosterPage {
        records: matched
            .iter()
            .skip(start)
            .take(page_size)
            .map(|r| (*r).clone())
            .collect(),
        total_matched: matched.len(),
        page_number,
        page_size,
        summary,
    }
}

/// Ordering of two records under a sort field and direction.
///
/// Records without a district trail the list in either direction when
/// sorting by district.
pub fn compare(
    a: &OfficeholderRecord,
    b: &OfficeholderRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    match field {
        SortField::District => match (&a.district, &b.district) {
            (Some(x), Some(y)) => direction.apply(x.sort_key().cmp(&y.sort_key())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortField::Name => direction.apply(cmp_ignore_case(&a.name, &b.name)),
        SortField::State => direction.apply(cmp_ignore_case(a.state.as_str(), b.state.as_str())),
        SortField::Office => direction.apply(cmp_ignore_case(a.office.label(), b.office.label())),
        SortField::Grade => direction.apply(cmp_ignore_case(a.grade.label(), b.grade.label())),
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
