//! Category command implementations

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::CatalogApi;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::CategoryDisplay;
use crate::output;

/// Run the category list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::CATEGORIES).await?;

    let categories = ctx.client.list_categories().await?;
    let rows: Vec<CategoryDisplay> = categories.into_iter().map(CategoryDisplay::from).collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}
