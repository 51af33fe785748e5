//! Question bank command implementations

use crate::cli::handlers::list::run_list_command;
use crate::cli::{GlobalOptions, PaginationArgs};
use crate::client::CatalogApi;
use crate::client::models::QuestionBank;
use crate::error::Result;
use crate::guard::routes;
use crate::models::display::BankDisplay;

/// Run the bank list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<QuestionBank, BankDisplay, _, _>(
        opts,
        routes::QUESTION_BANKS,
        pagination,
        "question banks",
        |client, params| async move { client.list_question_banks(Some(&params)).await },
    )
    .await
}
