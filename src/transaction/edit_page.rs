//! The page for editing an existing transaction.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    api::{ApiClient, Transaction},
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::form::{TransactionFormDefaults, price_toggle_script, transaction_form_fields},
};

/// The state needed for displaying the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Display the form for editing the transaction with `transaction_id`.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<i64>,
) -> Result<Response, Error> {
    // The backend has no endpoint for fetching a single transaction, so the
    // record is picked out of the full list.
    let transactions = state.api_client.transactions().await?;
    let transaction = transactions
        .iter()
        .find(|transaction| transaction.id == transaction_id)
        .ok_or(Error::NotFound)?;

    let today = OffsetDateTime::now_utc().date();
    let defaults = TransactionFormDefaults::from_transaction(transaction, today);

    Ok(edit_transaction_view(transaction, &defaults).into_response())
}

fn edit_transaction_view(transaction: &Transaction, defaults: &TransactionFormDefaults) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let update_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                h1 class="text-xl font-bold mb-4" { "Edit Transaction" }

                form
                    hx-put=(update_url)
                    hx-target-error="#alert-container"
                    class="space-y-4"
                {
                    (transaction_form_fields(defaults))

                    button
                        type="submit"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Save Changes"
                    }
                }
            }
        }
    };

    base("Edit Transaction", &[price_toggle_script()], &content)
}

#[cfg(test)]
mod edit_transaction_page_tests {
    use axum::{
        body::Body,
        extract::{Path, State},
        http::Response,
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        Error,
        api::{ApiClient, Symbol, TransactionPayload},
        fake_backend::FakeBackend,
    };

    use super::{EditTransactionPageState, get_edit_transaction_page};

    #[tokio::test]
    async fn form_is_prefilled_and_puts_to_transaction_endpoint() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let state = EditTransactionPageState {
            api_client: ApiClient::new(&base_url),
        };

        let created = state
            .api_client
            .create_transaction(&TransactionPayload {
                symbol: Symbol::ETH,
                amount: 2.5,
                price_at_purchase: 0.0,
                purchased_at: date!(2024 - 03 - 15),
            })
            .await
            .unwrap();

        let response = get_edit_transaction_page(State(state), Path(created.id))
            .await
            .unwrap();
        let html = parse_html(response).await;

        let form_selector = Selector::parse("form").unwrap();
        let form = html.select(&form_selector).next().unwrap();
        assert_eq!(
            form.value().attr("hx-put"),
            Some(format!("/transactions/{}", created.id).as_str())
        );

        let date_selector = Selector::parse("input#date").unwrap();
        let date_input = html.select(&date_selector).next().unwrap();
        assert_eq!(date_input.value().attr("value"), Some("2024-03-15"));

        let amount_selector = Selector::parse("input#amount").unwrap();
        let amount_input = html.select(&amount_selector).next().unwrap();
        assert_eq!(amount_input.value().attr("value"), Some("2.5"));

        // A zero price marks the transaction as received for free.
        let toggle_selector = Selector::parse("input#received-free").unwrap();
        let toggle = html.select(&toggle_selector).next().unwrap();
        assert!(toggle.value().attr("checked").is_some());
    }

    #[tokio::test]
    async fn unknown_transaction_returns_not_found() {
        let backend = FakeBackend::default();
        let base_url = backend.spawn().await;
        let state = EditTransactionPageState {
            api_client: ApiClient::new(&base_url),
        };

        let result = get_edit_transaction_page(State(state), Path(999)).await;

        assert!(matches!(result, Err(Error::NotFound)));
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
