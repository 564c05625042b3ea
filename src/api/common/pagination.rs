//
//  unsplash-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Unsplash API Requests and Responses
//!
//! Unsplash uses page-number pagination: `page` (1-indexed) and `per_page`
//! (at most 30). Every paged endpoint passes its paging through [`Pagination`],
//! which applies the same clamp everywhere:
//!
//! | Input | Transmitted |
//! |-------|-------------|
//! | `page < 1` | `page=1` |
//! | `per_page > 30` | `per_page=30` |
//! | anything else | unchanged |
//!
//! Search endpoints wrap their results in [`SearchResults`].
//!
//! # Example
//!
//! ```rust
//! use unsplash_client::api::Pagination;
//!
//! let paging = Pagination::new(0, 50);
//! assert_eq!(paging.page(), 1);
//! assert_eq!(paging.per_page(), 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::api::request::QueryParams;

/// Largest `per_page` the API accepts.
pub const MAX_PER_PAGE: u32 = 30;

/// Default `per_page` when the caller does not choose one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Requested page and page size, clamped on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// The page number that will be transmitted (never below 1).
    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    /// The page size that will be transmitted (never above 30).
    pub fn per_page(&self) -> u32 {
        self.per_page.min(MAX_PER_PAGE)
    }

    /// Returns the clamped `page` and `per_page` parameters.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("page", self.page())
            .with("per_page", self.per_page())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// One page of search results.
///
/// # Example
///
/// ```rust
/// use unsplash_client::api::SearchResults;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Hit { id: String }
///
/// let json = r#"{"total": 133, "total_pages": 7, "results": [{"id": "eOLpJytrbsQ"}]}"#;
/// let page: SearchResults<Hit> = serde_json::from_str(json).unwrap();
/// assert_eq!(page.total, 133);
/// assert_eq!(page.results[0].id, "eOLpJytrbsQ");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Total number of matches across all pages.
    pub total: u64,

    /// Number of pages at the requested page size.
    pub total_pages: u64,

    /// Matches on this page.
    pub results: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
