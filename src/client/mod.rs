//! CourseHub API client

pub mod api;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod rate_limit;

pub use api::{AdminApi, AuthApi, CatalogApi, CourseHubApi};
pub use http::CourseClient;
#[allow(unused_imports)]
pub use pagination::{MAX_PAGE_SIZE, Page, PaginationParams, SortOrder};
#[allow(unused_imports)]
pub use parallel::{MAX_PARALLEL_PAGE_FETCHES, gather_pages};
