//! Whoami command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::AuthApi;
use crate::error::Result;
use crate::guard::routes;
use crate::output::json;

/// Run the whoami command: fetch and display the signed-in user
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, routes::PROFILE).await?;

    let user = ctx.client.profile().await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Signed-in User".bold());
            println!();
            println!("  ID:       {}", user.id);
            println!("  Username: {}", user.username);
            if !user.roles.is_empty() {
                println!("  Roles:    {}", user.roles.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", json::format_json(&user)?),
    }

    Ok(())
}
