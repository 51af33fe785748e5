//! Generic list command handler
//!
//! The standard flow shared by paged list commands: build the context,
//! fetch one page, apply the limit, convert to display rows, print.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cache::CachedClient;
use crate::cli::{CommandContext, GlobalOptions, PaginationArgs};
use crate::client::pagination::{Page, PaginationParams};
use crate::client::CourseClient;
use crate::error::Result;
use crate::output;

/// Run a standard list command.
///
/// # Type Parameters
///
/// * `T` - The wire model type (e.g. `Order`)
/// * `D` - The display type implementing `From<T>`, `Tabled`, `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Order, OrderDisplay, _, _>(
///     opts,
///     routes::ORDERS,
///     pagination,
///     "orders",
///     |client, params| async move { client.list_orders(Some(&params)).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    route: &str,
    pagination: &PaginationArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Page<T>>>,
    F: FnOnce(Arc<CachedClient<CourseClient>>, PaginationParams) -> Fut,
{
    let ctx = CommandContext::new(opts, route).await?;

    debug!("fetching {}", resource_name);

    let params = pagination.to_params();
    let page = fetcher(ctx.client.clone(), params).await?;

    debug!("fetched {} {}", page.items.len(), resource_name);

    let limited: Vec<T> = match pagination.limit {
        Some(limit) => page.items.into_iter().take(limit).collect(),
        None => page.items,
    };

    let rows: Vec<D> = limited.into_iter().map(D::from).collect();
    output::print_listing(&rows, ctx.format, ctx.compact())
}
