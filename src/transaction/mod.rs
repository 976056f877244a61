//! Transaction management for the portfolio tracker.
//!
//! This module contains everything for recording purchases:
//! - The shared create/edit form and its validation
//! - View handlers for the transaction list and form pages
//! - Endpoints that forward mutations to the portfolio backend
//! - The CSV export

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod export;
mod form;
mod models;
mod new_transaction_page;
mod transactions_page;

pub use create_endpoint::{CreateTransactionState, create_transaction_endpoint};
pub use delete_endpoint::{DeleteTransactionState, delete_transaction_endpoint};
pub use edit_endpoint::{EditTransactionState, edit_transaction_endpoint};
pub use edit_page::{EditTransactionPageState, get_edit_transaction_page};
pub use export::{ExportTransactionsState, export_transactions};
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::{TransactionsPageState, get_transactions_page};
