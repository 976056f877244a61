//! The endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{AppState, api::ApiClient};

/// The state needed for deleting a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Delete the transaction with `transaction_id`.
///
/// Deleting does not trigger a price sync, removing a transaction does not
/// change market prices.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<i64>,
) -> Response {
    match state.api_client.delete_transaction(transaction_id).await {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(()) => Html("").into_response(),
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        api::{ApiClient, Symbol, TransactionPayload},
        fake_backend::FakeBackend,
    };

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    #[tokio::test]
    async fn deletes_transaction_and_returns_empty_body() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let state = DeleteTransactionState {
            api_client: ApiClient::new(&base_url),
        };

        let created = state
            .api_client
            .create_transaction(&TransactionPayload {
                symbol: Symbol::BTC,
                amount: 0.5,
                price_at_purchase: 5_000_000.0,
                purchased_at: date!(2024 - 01 - 01),
            })
            .await
            .unwrap();

        let response = delete_transaction_endpoint(State(state), Path(created.id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(backend.transactions().is_empty());
        assert_eq!(backend.sync_count(), 0);
    }

    #[tokio::test]
    async fn unknown_transaction_returns_not_found_alert() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let state = DeleteTransactionState {
            api_client: ApiClient::new(&base_url),
        };

        let response = delete_transaction_endpoint(State(state), Path(999)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
