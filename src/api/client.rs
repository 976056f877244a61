//! The HTTP client for the portfolio backend.
//!
//! Every piece of authoritative data lives behind the backend's REST API.
//! This module wraps the six endpoints the application uses in one async
//! method each and collapses all failures into [`crate::Error`].

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::{
    Error,
    api::models::{PortfolioPoint, Transaction, TransactionPayload},
};

/// How long to wait for the backend before giving up on a request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A thin client for the portfolio backend's REST API.
///
/// Cloning is cheap, the underlying [`reqwest::Client`] holds its connection
/// pool behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the backend at `base_url`,
    /// e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            // The builder only fails when TLS backend initialization fails,
            // which is unrecoverable at startup.
            .expect("failed to initialize the HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch all recorded transactions.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        let endpoint = "GET /api/transactions";
        let response = self
            .client
            .get(format!("{}/api/transactions", self.base_url))
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)?;

        response
            .json()
            .await
            .map_err(|error| api_error(endpoint, &error))
    }

    /// Record a new transaction and return it with its server-assigned ID.
    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> Result<Transaction, Error> {
        let endpoint = "POST /api/transactions";
        let response = self
            .client
            .post(format!("{}/api/transactions", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)?;

        response
            .json()
            .await
            .map_err(|error| api_error(endpoint, &error))
    }

    /// Overwrite the transaction with `id` and return the updated record.
    pub async fn update_transaction(
        &self,
        id: i64,
        payload: &TransactionPayload,
    ) -> Result<Transaction, Error> {
        let endpoint = "PUT /api/transactions/{id}";
        let response = self
            .client
            .put(format!("{}/api/transactions/{id}", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)?;

        response
            .json()
            .await
            .map_err(|error| api_error(endpoint, &error))
    }

    /// Delete the transaction with `id`.
    pub async fn delete_transaction(&self, id: i64) -> Result<(), Error> {
        let endpoint = "DELETE /api/transactions/{id}";
        let response = self
            .client
            .delete(format!("{}/api/transactions/{id}", self.base_url))
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)
    }

    /// Fetch the valuation history, ordered by date ascending.
    pub async fn portfolio_history(&self) -> Result<Vec<PortfolioPoint>, Error> {
        let endpoint = "GET /api/portfolio/history";
        let response = self
            .client
            .get(format!("{}/api/portfolio/history", self.base_url))
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)?;

        response
            .json()
            .await
            .map_err(|error| api_error(endpoint, &error))
    }

    /// Ask the backend to refresh its market prices.
    ///
    /// The response body (a status message) is ignored.
    pub async fn sync_prices(&self) -> Result<(), Error> {
        let endpoint = "POST /api/prices/sync";
        let response = self
            .client
            .post(format!("{}/api/prices/sync", self.base_url))
            .send()
            .await
            .map_err(|error| api_error(endpoint, &error))?;

        check_status(endpoint, &response)
    }
}

fn api_error(endpoint: &str, error: &dyn std::fmt::Display) -> Error {
    Error::Api {
        endpoint: endpoint.to_owned(),
        reason: error.to_string(),
    }
}

fn check_status(endpoint: &str, response: &Response) -> Result<(), Error> {
    match response.status() {
        status if status.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        status => Err(Error::Api {
            endpoint: endpoint.to_owned(),
            reason: format!("the backend responded with status {status}"),
        }),
    }
}

#[cfg(test)]
mod api_client_tests {
    use time::macros::date;

    use crate::{
        Error,
        api::{
            client::ApiClient,
            models::{Symbol, TransactionPayload},
        },
        fake_backend::FakeBackend,
    };

    #[tokio::test]
    async fn create_then_list_returns_created_transaction() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let client = ApiClient::new(&base_url);

        let payload = TransactionPayload {
            symbol: Symbol::BTC,
            amount: 0.5,
            price_at_purchase: 5_000_000.0,
            purchased_at: date!(2024 - 01 - 01),
        };

        let created = client
            .create_transaction(&payload)
            .await
            .expect("create should succeed");
        assert_eq!(created.symbol, Symbol::BTC);
        assert_eq!(created.amount, 0.5);

        let transactions = client
            .transactions()
            .await
            .expect("list should succeed");
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, created.id);
        assert_eq!(transactions[0].purchased_at.date(), date!(2024 - 01 - 01));
    }

    #[tokio::test]
    async fn update_overwrites_and_delete_removes() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let client = ApiClient::new(&base_url);

        let payload = TransactionPayload {
            symbol: Symbol::ETH,
            amount: 2.0,
            price_at_purchase: 400_000.0,
            purchased_at: date!(2024 - 02 - 01),
        };
        let created = client.create_transaction(&payload).await.unwrap();

        let updated = client
            .update_transaction(
                created.id,
                &TransactionPayload {
                    amount: 3.0,
                    ..payload
                },
            )
            .await
            .expect("update should succeed");
        assert_eq!(updated.amount, 3.0);

        client
            .delete_transaction(created.id)
            .await
            .expect("delete should succeed");
        assert!(client.transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_transaction_maps_to_not_found() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let client = ApiClient::new(&base_url);

        let result = client.delete_transaction(999).await;

        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_api_error() {
        // Port 9 (discard) should refuse connections.
        let client = ApiClient::new("http://127.0.0.1:9");

        let result = client.transactions().await;

        match result {
            Err(Error::Api { endpoint, .. }) => {
                assert_eq!(endpoint, "GET /api/transactions")
            }
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sync_prices_counts_on_fake_backend() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let client = ApiClient::new(&base_url);

        client.sync_prices().await.expect("sync should succeed");
        client.sync_prices().await.expect("sync should succeed");

        assert_eq!(backend.sync_count(), 2);
    }
}
