//! Question retrieval pipeline.
//!
//! Every listing endpoint (all questions, questions of a category, search)
//! hands its raw, already-ordered collection to [`Page::from_collection`],
//! so page semantics are identical across the API:
//!
//! - pages are 1-based, page numbers below 1 are treated as page 1
//! - a page holds at most `page_size` items, in the caller's order
//! - a page past the end of the collection is empty, not an error

use serde::Deserialize;
use utoipa::IntoParams;

/// `?page=N` query parameter shared by the listing endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

pub(crate) fn default_page() -> i64 {
    1
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PaginationQuery {
    pub fn page(&self) -> usize {
        clamp_page(self.page)
    }
}

/// Clamps a raw page number to the first page
pub fn clamp_page(page: i64) -> usize {
    usize::try_from(page.max(1)).unwrap_or(usize::MAX)
}

/// Returns the `page`-th slice of `items`, preserving their order.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    items.into_iter().skip(start).take(page_size).collect()
}

/// One page of formatted results plus the size of the full collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn from_collection<M>(collection: Vec<M>, page: usize, page_size: usize) -> Self
    where
        M: Into<T>,
    {
        let total = collection.len();
        let items = paginate(collection, page, page_size)
            .into_iter()
            .map(Into::into)
            .collect();

        Self { items, total }
    }
}
