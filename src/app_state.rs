//! Implements a struct that holds the state of the server.

use crate::api::ApiClient;

/// The state of the server.
///
/// All authoritative data lives behind the portfolio backend, so the only
/// state the server carries is the API client. Route handlers extract smaller
/// per-route states via `FromRef`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl AppState {
    /// Create a new [AppState] with a client for the backend at `api_url`.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_client: ApiClient::new(api_url),
        }
    }
}
