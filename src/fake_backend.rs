//! An in-process stand-in for the portfolio backend.
//!
//! Serves the six REST endpoints the application consumes from an in-memory
//! list of transactions behind a real TCP listener, so tests exercise the
//! full HTTP path.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use time::{Date, OffsetDateTime};
use tokio::net::TcpListener;

use crate::api::{PortfolioPoint, Symbol, Transaction};

/// The body the backend accepts for create and update requests.
#[derive(Debug, Deserialize)]
struct TransactionRequest {
    symbol: Symbol,
    amount: f64,
    price_at_purchase: f64,
    purchased_at: Date,
}

/// A fake portfolio backend holding its data in memory.
#[derive(Clone, Default)]
pub struct FakeBackend {
    transactions: Arc<Mutex<Vec<Transaction>>>,
    history: Arc<Mutex<Vec<PortfolioPoint>>>,
    next_id: Arc<AtomicI64>,
    sync_requests: Arc<AtomicUsize>,
}

impl FakeBackend {
    /// Create a backend that serves `history` from /api/portfolio/history.
    pub fn with_history(history: Vec<PortfolioPoint>) -> Self {
        let backend = Self::default();
        *backend.history.lock().unwrap() = history;
        backend
    }

    /// Serve the backend on an ephemeral local port and return its base URL.
    pub async fn spawn(&self) -> String {
        let router = self.clone().into_router();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{address}")
    }

    /// The transactions currently stored by the backend.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    /// How many price sync requests the backend has received.
    pub fn sync_count(&self) -> usize {
        self.sync_requests.load(Ordering::SeqCst)
    }

    fn into_router(self) -> Router {
        Router::new()
            .route(
                "/api/transactions",
                get(list_transactions).post(create_transaction),
            )
            .route(
                "/api/transactions/{id}",
                axum::routing::put(update_transaction).delete(delete_transaction),
            )
            .route("/api/portfolio/history", get(portfolio_history))
            .route("/api/prices/sync", post(sync_prices))
            .with_state(self)
    }

    fn store(&self, request: TransactionRequest) -> Transaction {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let transaction = Transaction {
            id,
            symbol: request.symbol,
            amount: request.amount,
            price_at_purchase: request.price_at_purchase,
            purchased_at: request.purchased_at.midnight().assume_utc(),
            created_at: OffsetDateTime::now_utc(),
        };

        self.transactions
            .lock()
            .unwrap()
            .push(transaction.clone());

        transaction
    }
}

async fn list_transactions(State(backend): State<FakeBackend>) -> Json<Vec<Transaction>> {
    Json(backend.transactions())
}

async fn create_transaction(
    State(backend): State<FakeBackend>,
    Json(request): Json<TransactionRequest>,
) -> Json<Transaction> {
    Json(backend.store(request))
}

async fn update_transaction(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(request): Json<TransactionRequest>,
) -> Response {
    let mut transactions = backend.transactions.lock().unwrap();

    match transactions.iter_mut().find(|transaction| transaction.id == id) {
        Some(transaction) => {
            transaction.symbol = request.symbol;
            transaction.amount = request.amount;
            transaction.price_at_purchase = request.price_at_purchase;
            transaction.purchased_at = request.purchased_at.midnight().assume_utc();

            Json(transaction.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_transaction(State(backend): State<FakeBackend>, Path(id): Path<i64>) -> Response {
    let mut transactions = backend.transactions.lock().unwrap();
    let initial_count = transactions.len();
    transactions.retain(|transaction| transaction.id != id);

    if transactions.len() == initial_count {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn portfolio_history(State(backend): State<FakeBackend>) -> Json<Vec<PortfolioPoint>> {
    Json(backend.history.lock().unwrap().clone())
}

async fn sync_prices(State(backend): State<FakeBackend>) -> Json<serde_json::Value> {
    backend.sync_requests.fetch_add(1, Ordering::SeqCst);

    Json(json!({ "message": "Prices synced successfully" }))
}
