//! Permission command implementations

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AdminApi;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::flatten_permissions;
use crate::output;

/// Run the permission list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::PERMISSIONS).await?;

    let permissions = ctx.client.list_permissions().await?;
    let rows = flatten_permissions(permissions);

    output::print_listing(&rows, ctx.format, ctx.compact())
}
