//! The dashboard page: portfolio stat cards plus the history and allocation
//! charts, derived from the backend's transaction and history data.

mod cards;
mod charts;
mod handlers;
mod stats;

pub use handlers::{DashboardState, get_dashboard_page};
