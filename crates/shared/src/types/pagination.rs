//! Pagination types matching the backend list contract.
//!
//! The backend paginates with `pageNumber`/`pageSize` query parameters and
//! answers with an `items`/`totalCount` envelope.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page, keeping the default page size.
    #[must_use]
    pub fn page(page_number: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            ..Self::default()
        }
    }

    /// Request for the following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page_number: self.page_number.saturating_add(1),
            ..self
        }
    }
}

/// Response envelope for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_count: u64,
}

impl<T> Paged<T> {
    /// Creates a paginated envelope.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    /// Total number of pages for the given page size. Always at least 1.
    #[must_use]
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if self.total_count == 0 || page_size == 0 {
            1
        } else {
            self.total_count.div_ceil(u64::from(page_size))
        }
    }

    /// Returns true when there is a page after `page_number`.
    #[must_use]
    pub fn has_next(&self, page_number: u32, page_size: u32) -> bool {
        u64::from(page_number) < self.total_pages(page_size)
    }
}
