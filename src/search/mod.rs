//! OPAC search: filtering, pagination, debounced input and result sessions.
//!
//! - `search`: substring filter over the catalog plus offset pagination
//! - `SearchType`: field selector used by the post-fetch matcher
//! - `Debouncer`: pending-input state machine feeding committed queries
//! - `OpacSession`: accumulated results with stale-response rejection

mod debounce;
mod query;
mod session;

use serde::Serialize;

use crate::models::Book;

pub use debounce::{DebounceState, Debouncer};
pub use query::{SearchType, matches, matches_catalog};
pub use session::{OpacSession, SearchRequest};

/// One page of search results.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchPage<T> {
    /// Records on this page, in source order
    pub items: Vec<T>,
    /// Number of matching records before slicing
    pub total: usize,
    /// Whether a later page has records
    pub has_more: bool,
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}

/// Filter the catalog by `query` and return page `page` (1-based).
///
/// A blank query matches every book. Otherwise the query, untrimmed, is
/// matched case-insensitively against title, author, language and department.
pub fn search(books: &[Book], query: &str, page: usize, page_size: usize) -> SearchPage<Book> {
    let matching: Vec<&Book> = if query.trim().is_empty() {
        books.iter().collect()
    } else {
        let needle = query.to_lowercase();
        books
            .iter()
            .filter(|book| matches_catalog(book, &needle))
            .collect()
    };

    let page = paginate(&matching, page, page_size);
    SearchPage {
        items: page.items.into_iter().cloned().collect(),
        total: page.total,
        has_more: page.has_more,
    }
}

/// Slice `matching` into page `page` of `page_size` records.
///
/// Page 0 is read as page 1 and a zero page size as 1.
pub fn paginate<T: Clone>(matching: &[T], page: usize, page_size: usize) -> SearchPage<T> {
    let page_size = page_size.max(1);
    let total = matching.len();
    let start = (page.max(1) - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);

    let items = if start < total {
        matching[start..end].to_vec()
    } else {
        Vec::new()
    };

    SearchPage {
        items,
        total,
        has_more: start.saturating_add(page_size) < total,
    }
}
