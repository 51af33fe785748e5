//! Role command implementations

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AdminApi;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::RoleDisplay;
use crate::output;

/// Run the role list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::ROLES).await?;

    let roles = ctx.client.list_roles().await?;
    let rows: Vec<RoleDisplay> = roles.into_iter().map(RoleDisplay::from).collect();

    output::print_listing(&rows, ctx.format, ctx.compact())
}
