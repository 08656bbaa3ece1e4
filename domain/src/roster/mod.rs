//! Roster domain
//!
//! Officeholder records and the query engine behind the grades listing.
//!
//! # Query pipeline
//!
//! ```text
//!  snapshot ──filter (AND)──▶ matched ──stable sort──▶ ordered ──slice──▶ page
//!                               │
//!                               └──▶ GradeSummary (all six labels)
//! ```
//!
//! The engine never mutates records; callers hand it a snapshot read from
//! whatever store owns them.

pub mod district;
pub mod entities;
pub mod office;
pub mod pagination;
pub mod query;
pub mod state;

pub use district::{District, DistrictKey};
pub use entities::{OfficeholderDraft, OfficeholderId, OfficeholderRecord};
pub use office::{Office, Status};
pub use pagination::{PageLink, page_window, total_pages};
pub use query::{
    DEFAULT_PAGE_SIZE, FilterSortSpec, GradeSummary, RosterPage, SortDirection, SortField, query,
};
pub use state::{StateCode, US_STATES};
