//! User account command implementations

use crate::cli::handlers::list::run_list_command;
use crate::cli::{GlobalOptions, PaginationArgs};
use crate::client::AdminApi;
use crate::client::models::UserAccount;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::UserDisplay;

/// Run the user list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<UserAccount, UserDisplay, _, _>(
        opts,
        routes::USERS,
        pagination,
        "users",
        |client, params| async move { client.list_users(Some(&params)).await },
    )
    .await
}
