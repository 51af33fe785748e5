//! Favorite command implementations

use crate::cli::handlers::list::run_list_command;
use crate::cli::{GlobalOptions, PaginationArgs};
use crate::client::CatalogApi;
use crate::client::models::Favorite;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::FavoriteDisplay;

/// Run the favorite list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<Favorite, FavoriteDisplay, _, _>(
        opts,
        routes::FAVORITES,
        pagination,
        "favorites",
        |client, params| async move { client.list_favorites(Some(&params)).await },
    )
    .await
}
