//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::Date;

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to the portfolio backend failed.
    ///
    /// All backend failures collapse into this variant: connection errors,
    /// timeouts, non-2xx statuses and malformed response bodies. The endpoint
    /// records which call failed, the reason is for the server logs.
    #[error("request to {endpoint} failed: {reason}")]
    Api {
        /// The method and path of the failing backend call.
        endpoint: String,
        /// A human readable description of what went wrong.
        reason: String,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// The backend reports this as a 404 response.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore future
    /// dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// A transaction was submitted with a zero or negative amount.
    #[error("{0} is not a valid amount, the amount must be greater than zero")]
    InvalidAmount(f64),

    /// A transaction was submitted without a unit price even though it was
    /// not marked as received for free.
    #[error("a unit price is required unless the transaction was received for free")]
    MissingPrice,

    /// The CSV export could not be written.
    #[error("could not write the CSV export: {0}")]
    CsvExport(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Api { endpoint, reason } => {
                tracing::error!("request to {endpoint} failed: {reason}");

                InternalServerError {
                    description: "The portfolio API is unavailable",
                    fix: "Check that the backend is running and reachable, then try again.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Api { endpoint, reason } => {
                tracing::error!("request to {endpoint} failed: {reason}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "The portfolio API is unavailable".to_owned(),
                        details: format!(
                            "The request to {endpoint} failed. Check that the backend is \
                            running, then try again."
                        ),
                    },
                )
            }
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not find transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if it has already been deleted."
                        .to_owned(),
                },
            ),
            Error::FutureDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction date".to_owned(),
                    details: format!(
                        "{date} is a date in the future, which is not allowed. \
                        Change the date to today or earlier."
                    ),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "{amount} is not a valid amount. Enter an amount greater than zero."
                    ),
                },
            ),
            Error::MissingPrice => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing unit price".to_owned(),
                    details: "Enter the unit price at the time of purchase, or mark the \
                    transaction as received for free."
                        .to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
