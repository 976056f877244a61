//! The page for recording a new transaction.

use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::form::{TransactionFormDefaults, price_toggle_script, transaction_form_fields},
};

/// Display the form for recording a new transaction.
pub async fn get_new_transaction_page() -> Markup {
    let today = OffsetDateTime::now_utc().date();

    new_transaction_view(&TransactionFormDefaults::new(today))
}

fn new_transaction_view(defaults: &TransactionFormDefaults) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                h1 class="text-xl font-bold mb-4" { "Add Transaction" }

                form
                    hx-post=(endpoints::CREATE_TRANSACTION)
                    hx-target-error="#alert-container"
                    class="space-y-4"
                {
                    (transaction_form_fields(defaults))

                    button
                        type="submit"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Transaction"
                    }
                }
            }
        }
    };

    base("Add Transaction", &[price_toggle_script()], &content)
}

#[cfg(test)]
mod new_transaction_page_tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::get_new_transaction_page;

    #[tokio::test]
    async fn page_posts_form_to_create_endpoint() {
        let markup = get_new_transaction_page().await;
        let html = Html::parse_document(&markup.into_string());

        let form_selector = Selector::parse("form").unwrap();
        let form = html.select(&form_selector).next().expect("page should have a form");
        assert_eq!(
            form.value().attr("hx-post"),
            Some(endpoints::CREATE_TRANSACTION)
        );

        // All form fields should be present.
        for selector in [
            "select#symbol",
            "input#date",
            "input#amount",
            "input#price_at_purchase",
            "input#received-free",
        ] {
            let field_selector = Selector::parse(selector).unwrap();
            assert!(
                html.select(&field_selector).next().is_some(),
                "missing field {selector}"
            );
        }
    }
}
