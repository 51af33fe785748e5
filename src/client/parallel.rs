//! Bounded parallel fetching for paginated list endpoints
//!
//! After the first page reveals `totalCount`, the remaining pages are
//! fetched concurrently, at most [`MAX_PARALLEL_PAGE_FETCHES`] in
//! flight. A failed page fails the whole gather; in-flight siblings are
//! dropped (and thereby cancelled).

use std::future::Future;

use futures::StreamExt;
use log::debug;

use crate::error::Result;

/// Concurrency cap for page fan-out
pub const MAX_PARALLEL_PAGE_FETCHES: usize = 8;

/// Fetch `pages` concurrently and collect all items in arrival order.
///
/// `fetch_page` is invoked lazily as concurrency slots free up, so at
/// most `max_concurrent` requests are in flight at once.
pub async fn gather_pages<T, F, Fut>(
    pages: Vec<usize>,
    fetch_page: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if pages.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        "fetching {} remaining pages, {} at a time",
        pages.len(),
        max_concurrent
    );

    let mut results = futures::stream::iter(pages.into_iter().map(|page| {
        let fut = fetch_page(page);
        async move { (page, fut.await) }
    }))
    .buffer_unordered(max_concurrent.max(1));

    let mut all_items = Vec::new();
    while let Some((page, result)) = results.next().await {
        let items = result?;
        debug!("page {} returned {} items", page, items.len());
        all_items.extend(items);
    }

    Ok(all_items)
}
