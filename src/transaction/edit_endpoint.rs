//! The endpoint for updating an existing transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{AppState, api::ApiClient, endpoints, transaction::form::TransactionForm};

/// The state needed for updating a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Overwrite the transaction with `transaction_id` and ask the backend to
/// refresh its prices.
///
/// As with creating, the price sync is awaited before redirecting so that the
/// pages the client lands on show consistent valuations.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<i64>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let payload = match form.into_payload() {
        Ok(payload) => payload,
        Err(error) => return error.into_alert_response(),
    };

    if let Err(error) = state
        .api_client
        .update_transaction(transaction_id, &payload)
        .await
    {
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
