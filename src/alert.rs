//! Alert messages for displaying success and error feedback to users.
//!
//! Alerts are rendered as partials and swapped into the fixed alert container
//! by HTMX (via the response-targets extension) when an endpoint fails.

use maud::{Markup, html};

/// A dismissable alert message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Feedback for an action that succeeded.
    #[allow(dead_code)]
    Success {
        /// A short summary of what happened.
        message: String,
        /// A longer explanation, may be empty.
        details: String,
    },
    /// Feedback for an action that failed.
    Error {
        /// A short summary of what went wrong.
        message: String,
        /// What the user can do about it, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML partial.
    pub fn into_html(self) -> Markup {
        let (container_style, icon, message, details) = match self {
            Alert::Success { message, details } => (
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-green-800 border-green-300 bg-green-50 shadow-lg \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "✓",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-red-800 border-red-300 bg-red-50 shadow-lg \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "✕",
                message,
                details,
            ),
        };

        html!(
            div class=(container_style) role="alert"
            {
                span class="font-bold" aria-hidden="true" { (icon) }

                div class="flex-1 text-sm"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    class="font-bold cursor-pointer"
                    aria-label="Dismiss"
                    onclick="this.parentElement.remove()"
                {
                    "×"
                }
            }
        )
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_renders_message_and_details() {
        let alert = Alert::Error {
            message: "Could not delete transaction".to_owned(),
            details: "Try refreshing the page.".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());
        let alert_selector = Selector::parse("div[role=alert]").unwrap();
        let alert_element = html
            .select(&alert_selector)
            .next()
            .expect("alert should render a div with role=alert");

        let text = alert_element.text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
        assert!(text.contains("Try refreshing the page."));
    }

    #[test]
    fn empty_details_are_omitted() {
        let alert = Alert::Error {
            message: "Something went wrong".to_owned(),
            details: String::new(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());
        let paragraph_selector = Selector::parse("p").unwrap();

        assert_eq!(html.select(&paragraph_selector).count(), 1);
    }
}
