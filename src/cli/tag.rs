//! Tag command implementations

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::CatalogApi;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::TagDisplay;
use crate::output;

/// Run the tag list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::TAGS).await?;

    let tags = ctx.client.list_tags().await?;
    let rows: Vec<TagDisplay> = tags.into_iter().map(TagDisplay::from).collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}

/// Run the tag create command
pub async fn create(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::TAGS).await?;

    let tag = ctx.client.create_tag(name).await?;

    // The in-memory lookup is stale the moment the server accepts
    ctx.refdata.clear_tags();

    println!("{} Created tag {} (id {})", "✓".green(), tag.name.bold(), tag.id);
    Ok(())
}
