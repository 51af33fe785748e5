//! Order command implementations

use crate::cli::handlers::list::run_list_command;
use crate::cli::{GlobalOptions, PaginationArgs};
use crate::client::AdminApi;
use crate::client::models::Order;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::OrderDisplay;

/// Run the order list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<Order, OrderDisplay, _, _>(
        opts,
        routes::ORDERS,
        pagination,
        "orders",
        |client, params| async move { client.list_orders(Some(&params)).await },
    )
    .await
}
