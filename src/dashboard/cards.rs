//! Stat card components for the dashboard.
//!
//! Shows the current value, invested amount and percentage change for each
//! asset and for the portfolio as a whole.

use maud::{Markup, html};

use crate::{
    dashboard::stats::{AssetStats, PortfolioStats},
    html::format_yen,
};

/// Formats a percentage change with one decimal and an explicit sign,
/// e.g. `+12.3%`.
fn format_percentage_change(value: f64) -> String {
    format!("{value:+.1}%")
}

/// Renders a colored badge for a percentage change, green for gains and
/// zero, red for losses.
fn change_badge(percentage_change: f64) -> Markup {
    let style = if percentage_change >= 0.0 {
        "inline-flex items-center px-2.5 py-0.5 text-xs font-semibold \
        text-green-800 bg-green-100 rounded-full \
        dark:bg-green-900 dark:text-green-300"
    } else {
        "inline-flex items-center px-2.5 py-0.5 text-xs font-semibold \
        text-red-800 bg-red-100 rounded-full \
        dark:bg-red-900 dark:text-red-300"
    };

    html!(
        span class=(style) { (format_percentage_change(percentage_change)) }
    )
}

fn stat_card(title: &str, value: f64, invested: f64, percentage_change: f64) -> Markup {
    html!(
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md
                flex flex-col gap-2"
        {
            div class="flex justify-between items-baseline"
            {
                h3 class="text-sm font-semibold text-gray-600 dark:text-gray-400 uppercase"
                {
                    (title)
                }

                (change_badge(percentage_change))
            }

            p class="text-2xl font-bold" { (format_yen(value)) }

            p class="text-sm text-gray-600 dark:text-gray-400"
            {
                "Invested " (format_yen(invested))
            }
        }
    )
}

/// Renders the grid of stat cards for the portfolio and each asset.
pub(super) fn stat_cards_view(stats: &PortfolioStats) -> Markup {
    html!(
        section
            id="stat-cards"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                (stat_card(
                    "Total",
                    stats.total_value,
                    stats.total_invested,
                    stats.percentage_change,
                ))

                @for asset in &stats.assets {
                    (asset_card(asset))
                }
            }
        }
    )
}

fn asset_card(asset: &AssetStats) -> Markup {
    stat_card(
        &asset.symbol.to_string(),
        asset.current_value,
        asset.invested,
        asset.percentage_change,
    )
}

#[cfg(test)]
mod cards_tests {
    use scraper::{Html, Selector};

    use crate::{
        api::Symbol,
        dashboard::stats::{AssetStats, PortfolioStats},
    };

    use super::{format_percentage_change, stat_cards_view};

    #[test]
    fn percentage_change_has_sign_and_one_decimal() {
        assert_eq!(format_percentage_change(36.0), "+36.0%");
        assert_eq!(format_percentage_change(-5.25), "-5.2%");
        assert_eq!(format_percentage_change(0.0), "+0.0%");
    }

    #[test]
    fn renders_one_card_per_asset_plus_total() {
        let stats = PortfolioStats {
            assets: vec![
                AssetStats {
                    symbol: Symbol::BTC,
                    current_value: 3_000_000.0,
                    invested: 2_500_000.0,
                    percentage_change: 20.0,
                },
                AssetStats {
                    symbol: Symbol::ETH,
                    current_value: 400_000.0,
                    invested: 0.0,
                    percentage_change: 0.0,
                },
            ],
            total_value: 3_400_000.0,
            total_invested: 2_500_000.0,
            percentage_change: 36.0,
        };

        let html = Html::parse_fragment(&stat_cards_view(&stats).into_string());

        let heading_selector = Selector::parse("h3").unwrap();
        let headings: Vec<String> = html
            .select(&heading_selector)
            .map(|heading| heading.text().collect())
            .collect();
        assert_eq!(headings, vec!["Total", "BTC", "ETH"]);

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("¥3,400,000"));
        assert!(text.contains("+36.0%"));
        assert!(text.contains("Invested ¥0"));
    }
}
