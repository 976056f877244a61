//! The page shown when a request fails on the server side.
//!
//! Most 500s in this application trace back to the portfolio backend being
//! unreachable, so the default copy points the user at the backend connection
//! rather than a generic "try again".

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The 500 error page, with copy describing what failed and what to do.
pub struct InternalServerError<'a> {
    /// What went wrong, shown as the page headline.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Something went wrong while preparing this page.",
            fix: "Check that the portfolio backend is running and reachable, \
                or look at the server logs for details.",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

/// Display the 500 error page with the default copy.
pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Html;

    use super::InternalServerError;

    #[tokio::test]
    async fn default_page_mentions_the_backend() {
        let response = InternalServerError::default().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = Html::parse_document(&String::from_utf8_lossy(&body));

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("500"));
        assert!(text.contains("portfolio backend"));
    }

    #[tokio::test]
    async fn custom_copy_is_rendered() {
        let response = InternalServerError {
            description: "The portfolio API is unavailable",
            fix: "Check that the backend is running and reachable, then try again.",
        }
        .into_response();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        assert!(text.contains("The portfolio API is unavailable"));
    }
}
