//! The page listing all recorded transactions.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_amount, format_yen, link,
    },
    navigation::NavBar,
    transaction::models::TransactionRow,
};

/// The state needed for displaying the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Display the table of recorded transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let transactions = state.api_client.transactions().await?;
    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();

    Ok(transactions_view(&rows).into_response())
}

fn transactions_view(rows: &[TransactionRow]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(endpoints::EXPORT_TRANSACTIONS) class=(LINK_STYLE)
                    {
                        "Download CSV"
                    }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Asset" }
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class="px-6 py-3 text-right" { "Unit Price" }
                                th scope="col" class="px-6 py-3 text-right" { "Total" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (transaction_row_view(row))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        data-empty-state="true"
                                        class="px-6 py-4 text-center"
                                    {
                                        "No transactions yet. "
                                        (link(endpoints::NEW_TRANSACTION_VIEW, "Add your first transaction"))
                                        "."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

fn transaction_row_view(row: &TransactionRow) -> Markup {
    let confirm_message = format!(
        "Are you sure you want to delete the {} transaction from {}? This cannot be undone.",
        row.symbol, row.date
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(row.date) { (row.date) }
            }
            td class=(TABLE_CELL_STYLE) { (row.symbol) }
            td class="px-6 py-4 text-right tabular-nums" { (format_amount(row.amount)) }
            td class="px-6 py-4 text-right tabular-nums" { (format_yen(row.price_at_purchase)) }
            td class="px-6 py-4 text-right tabular-nums" { (format_yen(row.total)) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(row.edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        type="button"
                        hx-delete=(row.delete_url)
                        hx-confirm=(confirm_message)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
