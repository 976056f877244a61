//! The shared form for creating and editing transactions.

use maud::{Markup, PreEscaped, html};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    api::{Symbol, Transaction, TransactionPayload},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement},
};

/// The values the form fields are pre-filled with.
pub(super) struct TransactionFormDefaults {
    pub symbol: Symbol,
    pub amount: Option<f64>,
    pub price_at_purchase: Option<f64>,
    /// Whether the "received for free" toggle starts checked. A transaction
    /// with a zero price was received for free.
    pub received_free: bool,
    pub date: Date,
    pub max_date: Date,
}

impl TransactionFormDefaults {
    /// Empty defaults for the create form, dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            symbol: Symbol::BTC,
            amount: None,
            price_at_purchase: None,
            received_free: false,
            date: today,
            max_date: today,
        }
    }

    /// Defaults pre-filled from an existing transaction for the edit form.
    pub fn from_transaction(transaction: &Transaction, today: Date) -> Self {
        Self {
            symbol: transaction.symbol,
            amount: Some(transaction.amount),
            price_at_purchase: Some(transaction.price_at_purchase),
            received_free: transaction.price_at_purchase == 0.0,
            date: transaction.purchase_date(),
            max_date: today,
        }
    }
}

pub(super) fn transaction_form_fields(defaults: &TransactionFormDefaults) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount}"));
    let price_str = defaults
        .price_at_purchase
        .map(|price| format!("{price}"));

    html! {
        div
        {
            label
                for="symbol"
                class=(FORM_LABEL_STYLE)
            {
                "Asset"
            }

            select
                name="symbol"
                id="symbol"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for symbol in Symbol::ALL {
                    @if symbol == defaults.symbol {
                        option value=(symbol) selected { (symbol) }
                    } @else {
                        option value=(symbol) { (symbol) }
                    }
                }
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                max=(defaults.max_date)
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="any"
                min="0"
                placeholder="0.01"
                required
                value=[amount_str.as_deref()]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="price_at_purchase"
                class=(FORM_LABEL_STYLE)
            {
                "Unit price (JPY)"
            }

            input
                name="price_at_purchase"
                id="price_at_purchase"
                type="number"
                step="any"
                min="0"
                placeholder="5000000"
                required[!defaults.received_free]
                disabled[defaults.received_free]
                value=[price_str.as_deref()]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div class="flex items-center gap-3"
        {
            input
                name="received_free"
                id="received-free"
                type="checkbox"
                checked[defaults.received_free]
                class="h-4 w-4 shrink-0 cursor-pointer text-blue-600
                    border-gray-300 dark:border-gray-600";

            label
                for="received-free"
                class="text-sm font-medium text-gray-900 dark:text-white cursor-pointer"
            {
                "Received for free (staking reward, bonus)"
            }
        }
    }
}

/// The script that wires the "received for free" toggle to the price input.
///
/// Checking the toggle zeroes and disables the price input, unchecking it
/// re-enables and clears it. Disabled inputs are not submitted, the endpoint
/// treats a missing price on a free transaction as zero.
pub(super) fn price_toggle_script() -> HeadElement {
    HeadElement::ScriptSource(PreEscaped(
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            const toggle = document.getElementById('received-free');
            const price = document.getElementById('price_at_purchase');
            if (!toggle || !price) return;

            const update = () => {
                if (toggle.checked) {
                    price.value = '0';
                    price.disabled = true;
                    price.required = false;
                } else {
                    price.disabled = false;
                    price.required = true;
                }
            };

            toggle.addEventListener('change', () => {
                if (!toggle.checked) {
                    price.value = '';
                }
                update();
            });
        });
        "#
        .to_owned(),
    ))
}

/// The form data for creating or updating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The asset that was purchased.
    pub symbol: Symbol,
    /// The quantity purchased.
    pub amount: f64,
    /// The date when the purchase happened.
    pub date: Date,
    /// The unit price in yen. Absent when the price input was disabled by the
    /// "received for free" toggle.
    #[serde(default)]
    pub price_at_purchase: Option<f64>,
    /// Present (as "on") when the "received for free" toggle was checked.
    #[serde(default)]
    pub received_free: Option<String>,
}

impl TransactionForm {
    /// Validate the form and convert it into a request payload for the
    /// backend.
    pub(super) fn into_payload(self) -> Result<TransactionPayload, Error> {
        if self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if self.date > OffsetDateTime::now_utc().date() {
            return Err(Error::FutureDate(self.date));
        }

        let price_at_purchase = if self.received_free.is_some() {
            0.0
        } else {
            self.price_at_purchase.ok_or(Error::MissingPrice)?
        };

        Ok(TransactionPayload {
            symbol: self.symbol,
            amount: self.amount,
            price_at_purchase,
            purchased_at: self.date,
        })
    }
}
