//! Browse Roster use case.
//!
//! Reads a snapshot from the repository and runs the domain query engine
//! over it. The repository is never handed to the engine directly.

use crate::ports::officeholder_repository::{OfficeholderRepository, RepositoryError};
use poligrade_domain::{FilterSortSpec, PageLink, RosterPage, page_window};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while browsing the roster
#[derive(Error, Debug)]
pub enum BrowseRosterError {
    #[error("Failed to load roster: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the [`BrowseRosterUseCase`]
#[derive(Debug, Clone, Default)]
pub struct BrowseRosterInput {
    pub spec: FilterSortSpec,
}

impl BrowseRosterInput {
    pub fn new(spec: FilterSortSpec) -> Self {
        Self { spec }
    }
}

/// A roster page plus the page links to offer around it
#[derive(Debug, Clone, Serialize)]
pub struct BrowseRosterOutput {
    #[serde(flatten)]
    pub page: RosterPage,
    pub total_pages: usize,
    pub page_links: Vec<PageLink>,
}

/// Use case for the public grades listing
pub struct BrowseRosterUseCase {
    repository: Arc<dyn OfficeholderRepository>,
}

impl BrowseRosterUseCase {
    pub fn new(repository: Arc<dyn OfficeholderRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        input: BrowseRosterInput,
    ) -> Result<BrowseRosterOutput, BrowseRosterError> {
        let snapshot = self.repository.list_all().await?;
        debug!("Loaded roster snapshot with {} records", snapshot.len());

        let page = poligrade_domain::query(&snapshot, &input.spec);
        let total_pages = page.total_pages();
        let page_links = page_window(page.page_number, total_pages);

        info!(
            "Roster query matched {} of {} records (page {}/{})",
            page.total_matched,
            snapshot.len(),
            page.page_number,
            total_pages
        );

        Ok(BrowseRosterOutput {
            page,
            total_pages,
            page_links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryRepository, record};
    use poligrade_domain::{AlignmentLabel, Office, SortDirection, SortField};

    fn roster() -> Vec<poligrade_domain::OfficeholderRecord> {
        vec![
            record("1", "Alice Adams", "CA", Office::Senator, AlignmentLabel::Liberal),
            record("2", "Bob Baker", "TX", Office::Governor, AlignmentLabel::Conservative),
            record("3", "Cara Cole", "NY", Office::Senator, AlignmentLabel::Progressive),
            record("4", "Dan Diaz", "FL", Office::Senator, AlignmentLabel::Moderate),
            record("5", "Eve Evans", "OH", Office::Governor, AlignmentLabel::Centrist),
            record("6", "Fay Fox", "WA", Office::Senator, AlignmentLabel::Liberal),
            record("7", "Gus Gray", "GA", Office::Senator, AlignmentLabel::Nationalist),
        ]
    }

    #[tokio::test]
    async fn test_senators_sorted_descending() {
        let use_case = BrowseRosterUseCase::new(Arc::new(MemoryRepository::with(roster())));
        let spec = FilterSortSpec::default()
            .with_office(Office::Senator)
            .sorted_by(SortField::Name, SortDirection::Descending);

        let output = use_case.execute(BrowseRosterInput::new(spec)).await.unwrap();

        let names: Vec<&str> = output.page.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Gus Gray", "Fay Fox", "Dan Diaz", "Cara Cole", "Alice Adams"]
        );
        assert_eq!(output.page.total_matched, 5);
        assert_eq!(output.page.summary.total(), 5);
        assert_eq!(output.page.summary.count(AlignmentLabel::Liberal), 2);
    }

    #[tokio::test]
    async fn test_page_links() {
        let use_case = BrowseRosterUseCase::new(Arc::new(MemoryRepository::with(roster())));
        let spec = FilterSortSpec::default().with_page_size(2).page(2);

        let output = use_case.execute(BrowseRosterInput::new(spec)).await.unwrap();

        assert_eq!(output.total_pages, 4);
        assert_eq!(
            output.page_links,
            vec![
                PageLink::Page(1),
                PageLink::Page(2),
                PageLink::Page(3),
                PageLink::Page(4)
            ]
        );
        assert_eq!(output.page.records.len(), 2);
    }

    #[tokio::test]
    async fn test_repository_failure_surfaces() {
        let use_case = BrowseRosterUseCase::new(Arc::new(MemoryRepository::failing()));
        let result = use_case.execute(BrowseRosterInput::default()).await;
        assert!(matches!(result, Err(BrowseRosterError::Repository(_))));
    }
}
