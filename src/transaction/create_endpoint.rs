//! The endpoint for recording a new transaction.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{AppState, api::ApiClient, endpoints, transaction::form::TransactionForm};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Record a new transaction and ask the backend to refresh its prices.
///
/// The price sync is awaited before redirecting so that the transaction list
/// and dashboard reflect the new transaction with up-to-date valuations.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let payload = match form.into_payload() {
        Ok(payload) => payload,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = state.api_client.create_transaction(&payload).await {
        return error.into_alert_response();
    }

    if let Err(error) = state.api_client.sync_prices().await {
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
