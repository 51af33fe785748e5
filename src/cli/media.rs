//! Media command implementations

use colored::Colorize;

use crate::cli::handlers::list::run_list_command;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::client::AdminApi;
use crate::client::models::MediaAsset;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::MediaDisplay;
use crate::output::formatters::format_bytes;
use crate::output::json;

/// Run the media list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<MediaAsset, MediaDisplay, _, _>(
        opts,
        routes::MEDIA,
        pagination,
        "media assets",
        |client, params| async move { client.list_media(Some(&params)).await },
    )
    .await
}

/// Run the media quota command
pub async fn quota(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::STORAGE).await?;

    let quota = ctx.client.storage_quota().await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Media Storage Quota".bold());
            println!();
            println!("  Used:  {}", format_bytes(quota.used_bytes));
            println!("  Total: {}", format_bytes(quota.total_bytes));
            println!("  {}% used", quota.used_percent());
        }
        OutputFormat::Json => println!("{}", json::format_json(&quota)?),
    }

    Ok(())
}
