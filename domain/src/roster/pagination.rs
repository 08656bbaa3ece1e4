//! Page arithmetic for roster listings.

use serde::Serialize;

/// Number of pages needed for `total` rows, `ceil(total / page_size)`.
///
/// A zero page size is treated as 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// An entry in a page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageLink {
    Page(usize),
    /// Skipped pages between two links
    Gap,
}

/// Page links to offer around `current`.
///
/// Always includes the first and last page plus the pages adjacent to
/// `current`, with a [`PageLink::Gap`] wherever numbers are skipped.
///
/// ```
/// use poligrade_domain::roster::pagination::{page_window, PageLink::*};
///
/// assert_eq!(page_window(5, 9), vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]);
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut previous: Option<usize> = None;

    for page in 1..=total {
        let shown = page == 1 || page == total || page.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if previous.is_some_and(|p| page - p > 1) {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }

    links
}
