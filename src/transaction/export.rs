//! The CSV export of the transaction list.

use axum::{
    extract::{FromRef, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    api::{ApiClient, Transaction},
    html::format_amount,
};

/// The state needed for exporting transactions as CSV.
#[derive(Debug, Clone)]
pub struct ExportTransactionsState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for ExportTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// The UTF-8 byte order mark. Excel needs it to detect the encoding,
/// without it yen signs and other non-ASCII text are garbled.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Download the transaction list as a CSV file.
pub async fn export_transactions(
    State(state): State<ExportTransactionsState>,
) -> Result<Response, Error> {
    let transactions = state.api_client.transactions().await?;
    let csv = build_csv(&transactions)?;

    let filename = format!("transactions_{}.csv", OffsetDateTime::now_utc().date());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|error| Error::CsvExport(error.to_string()))?,
    );

    Ok((headers, csv).into_response())
}

fn build_csv(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::from(UTF8_BOM);

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        writer
            .write_record([
                "ID",
                "Date",
                "Symbol",
                "Amount",
                "Unit Price (JPY)",
                "Total (JPY)",
            ])
            .map_err(|error| Error::CsvExport(error.to_string()))?;

        for transaction in transactions {
            // Totals are floored to whole yen, matching the on-screen rounding
            // direction for money that was actually spent.
            let total = transaction.total().floor() as i64;

            writer
                .write_record([
                    transaction.id.to_string(),
                    transaction.purchase_date().to_string(),
                    transaction.symbol.to_string(),
                    format_amount(transaction.amount),
                    format_amount(transaction.price_at_purchase),
                    total.to_string(),
                ])
                .map_err(|error| Error::CsvExport(error.to_string()))?;
        }

        writer
            .flush()
            .map_err(|error| Error::CsvExport(error.to_string()))?;
    }

    Ok(buffer)
}
