//! Dashboard HTTP handlers and view rendering.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::ApiClient,
    dashboard::{
        cards::stat_cards_view,
        charts::{
            DashboardChart, allocation_chart, allocation_slices, charts_script, charts_view,
            history_chart,
        },
        stats::{PortfolioStats, portfolio_stats},
    },
    endpoints,
    html::{HeadElement, base, link},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the portfolio backend REST API.
    pub api_client: ApiClient,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// Display a page with an overview of the portfolio.
///
/// Transactions and the valuation history are fetched concurrently, then a
/// price sync is kicked off in the background. The rendered page is always a
/// consistent snapshot, refreshed prices become visible on the next load.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let (transactions, history) = tokio::try_join!(
        state.api_client.transactions(),
        state.api_client.portfolio_history()
    )?;

    let api_client = state.api_client.clone();
    tokio::spawn(async move {
        if let Err(error) = api_client.sync_prices().await {
            tracing::error!("background price sync failed: {error}");
        }
    });

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    // The last history point is the most recent sample.
    let Some(latest) = history.last() else {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    };

    let stats = portfolio_stats(&transactions, latest);

    let charts = [
        DashboardChart {
            id: "history-chart",
            options: history_chart(&history).to_string(),
        },
        DashboardChart {
            id: "allocation-chart",
            options: allocation_chart(&allocation_slices(latest)).to_string(),
        },
    ];

    Ok(dashboard_view(nav_bar, &stats, &charts).into_response())
}

/// Renders the dashboard page when no history data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding a transaction");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once your portfolio has some history.
                Get started by " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with stat cards and charts.
fn dashboard_view<'a>(
    nav_bar: NavBar<'a>,
    stats: &PortfolioStats,
    charts: &[DashboardChart],
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (stat_cards_view(stats))

            (charts_view(charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}
