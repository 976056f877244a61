//! The client for the portfolio backend REST API and its data types.

mod client;
mod models;

pub use client::ApiClient;
pub use models::{PortfolioPoint, Symbol, Transaction, TransactionPayload};
