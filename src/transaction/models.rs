//! View models for the transaction table.

use time::Date;

use crate::{
    api::{Symbol, Transaction},
    endpoints::{self, format_endpoint},
};

/// One row of the transaction table, with its action URLs resolved.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TransactionRow {
    pub date: Date,
    pub symbol: Symbol,
    pub amount: f64,
    pub price_at_purchase: f64,
    /// The computed purchase total, `amount * price_at_purchase`.
    pub total: f64,
    pub edit_url: String,
    pub delete_url: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.purchase_date(),
            symbol: transaction.symbol,
            amount: transaction.amount,
            price_at_purchase: transaction.price_at_purchase,
            total: transaction.total(),
            edit_url: format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id),
            delete_url: format_endpoint(endpoints::TRANSACTION, transaction.id),
        }
    }
}
