//! Shared pagination utilities
//!
//! Pages are 1-indexed. `total_page` is the integer ceiling of
//! `total / size`, so an empty result set has zero pages.

use serde::{Deserialize, Serialize};

/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page selection taken from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self { page, size }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Row offset for the SQL `OFFSET` clause.
    ///
    /// Saturates rather than overflowing on absurd page numbers; such pages
    /// are simply empty.
    pub fn offset(&self) -> i64 {
        (self.page() - 1).max(0).saturating_mul(self.size())
    }
}

/// Page metadata returned alongside search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub current_page: i64,
    pub total_page: i64,
    pub size: i64,
}

impl Paging {
    pub fn new(current_page: i64, size: i64, total: i64) -> Self {
        Self {
            current_page,
            total_page: total_pages(total, size),
            size,
        }
    }

    pub fn from_request(request: &PageRequest, total: i64) -> Self {
        Self::new(request.page(), request.size(), total)
    }
}

/// Integer ceiling of `total / size`.
pub fn total_pages(total: i64, size: i64) -> i64 {
    if total <= 0 || size <= 0 {
        return 0;
    }
    (total + size - 1) / size
}
