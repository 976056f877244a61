//! Data returned by (and sent to) the portfolio backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The ticker symbol of a tracked asset.
///
/// The backend only tracks a small fixed set of assets, so the symbol is a
/// closed enum rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Bitcoin.
    BTC,
    /// Ethereum.
    ETH,
}

impl Symbol {
    /// Every symbol the backend tracks, in display order.
    pub const ALL: [Symbol; 2] = [Symbol::BTC, Symbol::ETH];
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::BTC => write!(f, "BTC"),
            Symbol::ETH => write!(f, "ETH"),
        }
    }
}

/// A purchase transaction as stored by the backend.
///
/// The client never owns this data, it only holds a transient snapshot that
/// is refreshed after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The server-assigned ID of the transaction.
    pub id: i64,
    /// The asset that was purchased.
    pub symbol: Symbol,
    /// The quantity purchased. May carry many fractional digits for
    /// fractions of a coin.
    pub amount: f64,
    /// The unit price in yen at the time of purchase. Zero means the asset
    /// was received for free (staking reward, bonus).
    pub price_at_purchase: f64,
    /// When the purchase happened.
    #[serde(with = "time::serde::rfc3339")]
    pub purchased_at: OffsetDateTime,
    /// When the record was created on the server.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// The total amount paid for this transaction in yen.
    pub fn total(&self) -> f64 {
        self.amount * self.price_at_purchase
    }

    /// The calendar date of the purchase.
    pub fn purchase_date(&self) -> Date {
        self.purchased_at.date()
    }
}

/// The request body for creating or updating a transaction.
///
/// The backend accepts a plain `YYYY-MM-DD` date for `purchased_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    /// The asset that was purchased.
    pub symbol: Symbol,
    /// The quantity purchased.
    pub amount: f64,
    /// The unit price in yen at the time of purchase.
    pub price_at_purchase: f64,
    /// The calendar date of the purchase.
    pub purchased_at: Date,
}

/// One server-computed valuation sample.
///
/// Points are ordered by date ascending, so the last element of a history
/// response is the most recent sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPoint {
    /// The day this sample covers.
    pub date: Date,
    /// The market value of all holdings on this day.
    pub total_value: f64,
    /// The cumulative amount invested up to this day.
    pub total_investment: f64,
    /// The market value of the BTC holdings on this day.
    pub btc_value: f64,
    /// The market value of the ETH holdings on this day.
    pub eth_value: f64,
}

impl PortfolioPoint {
    /// The market value of the holdings in `symbol` on this day.
    pub fn value_of(&self, symbol: Symbol) -> f64 {
        match symbol {
            Symbol::BTC => self.btc_value,
            Symbol::ETH => self.eth_value,
        }
    }
}
