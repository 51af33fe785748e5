//! Pagination helpers for API requests

use serde::{Deserialize, Serialize};

/// Maximum page size accepted by the CourseHub API.
/// Using this as default minimizes round trips.
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters for list requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().page_size(50).page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Items per page (default: 100, max: 100)
    pub page_size: Option<usize>,
    /// Page number (1-indexed)
    pub page: Option<usize>,
    /// Sort field name
    pub sort_by: Option<String>,
    /// Sort order
    pub sort_order: Option<SortOrder>,
}

/// Sort order for paginated requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Convert to query parameters using CourseHub wire names:
    /// `page` (1-indexed), `pageSize`, `sortField`, `sortDir`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let size = self.page_size.unwrap_or(MAX_PAGE_SIZE);
        params.push(("pageSize", size.to_string()));

        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }

        if let Some(ref field) = self.sort_by {
            params.push(("sortField", field.clone()));
        }

        if let Some(order) = self.sort_order {
            let dir = match order {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            };
            params.push(("sortDir", dir.to_string()));
        }

        params
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.page_size.is_none()
            && self.page.is_none()
            && self.sort_by.is_none()
            && self.sort_order.is_none()
    }
}

/// One page of a list response, as delivered inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items for this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Total items across all pages
    #[serde(default)]
    pub total_count: Option<usize>,

    /// Current page number (1-indexed)
    #[serde(default)]
    pub page: Option<usize>,

    /// Items per page
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl<T> Page<T> {
    #[allow(dead_code)]
    pub fn of(items: Vec<T>) -> Self {
        Self {
            items,
            total_count: None,
            page: None,
            page_size: None,
        }
    }

    /// Total number of pages, when the response carried enough metadata
    pub fn page_count(&self) -> Option<usize> {
        let total = self.total_count?;
        let size = self.page_size?;
        if size == 0 {
            return None;
        }
        Some(total.div_ceil(size))
    }

    /// Page numbers after the current one
    pub fn remaining_pages(&self) -> Vec<usize> {
        let Some(count) = self.page_count() else {
            return Vec::new();
        };
        let current = self.page.unwrap_or(1);
        ((current + 1)..=count).collect()
    }

    pub fn has_more(&self) -> bool {
        !self.remaining_pages().is_empty()
    }
}
