//! Chart generation and rendering for the dashboard.
//!
//! This module creates the two ECharts visualizations for the portfolio:
//! - **History Chart**: Valuation and invested amounts over time
//! - **Allocation Chart**: How the current value is split across assets
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, DataZoom, Grid, Legend, Title},
    element::{AreaStyle, AxisLabel, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    api::{PortfolioPoint, Symbol},
    html::HeadElement,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// The valuation history as an area chart, with a data zoom slider for
/// narrowing down the date range.
pub(super) fn history_chart(points: &[PortfolioPoint]) -> Chart {
    let labels: Vec<String> = points.iter().map(|point| point.date.to_string()).collect();
    let total_values: Vec<f64> = points.iter().map(|point| point.total_value).collect();
    let invested: Vec<f64> = points.iter().map(|point| point.total_investment).collect();
    let btc_values: Vec<f64> = points.iter().map(|point| point.btc_value).collect();
    let eth_values: Vec<f64> = points.iter().map(|point| point.eth_value).collect();

    Chart::new()
        .title(Title::new().text("Portfolio value").subtext("All time"))
        .tooltip(yen_tooltip())
        .legend(Legend::new().top("6%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(yen_formatter())),
        )
        .data_zoom(DataZoom::new().start(0).end(100))
        .series(
            Line::new()
                .name("Total value")
                .area_style(AreaStyle::new())
                .data(total_values),
        )
        .series(Line::new().name("Invested").data(invested))
        .series(
            Line::new()
                .name("BTC value")
                .area_style(AreaStyle::new())
                .data(btc_values),
        )
        .series(
            Line::new()
                .name("ETH value")
                .area_style(AreaStyle::new())
                .data(eth_values),
        )
}

/// One slice of the allocation pie.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AllocationSlice {
    /// The asset this slice represents.
    pub symbol: Symbol,
    /// The current market value of the asset.
    pub value: f64,
    /// The share of the displayed total, in percent.
    pub share: f64,
}

impl AllocationSlice {
    /// The slice label shown in the chart legend, e.g. `BTC (88.2%)`.
    fn label(&self) -> String {
        format!("{} ({:.1}%)", self.symbol, self.share)
    }
}

/// Build the allocation pie data from the most recent history point.
///
/// Assets with a value of zero or less are excluded and the rest is sorted
/// descending by value, so the largest holding comes first.
pub(super) fn allocation_slices(latest: &PortfolioPoint) -> Vec<AllocationSlice> {
    let mut values: Vec<(Symbol, f64)> = Symbol::ALL
        .iter()
        .map(|&symbol| (symbol, latest.value_of(symbol)))
        .filter(|&(_, value)| value > 0.0)
        .collect();

    values.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = values.iter().map(|&(_, value)| value).sum();

    values
        .into_iter()
        .map(|(symbol, value)| AllocationSlice {
            symbol,
            value,
            share: value / total * 100.0,
        })
        .collect()
}

/// The current allocation as a donut chart.
pub(super) fn allocation_chart(slices: &[AllocationSlice]) -> Chart {
    let labels: Vec<String> = slices.iter().map(AllocationSlice::label).collect();
    let data: Vec<(f64, &str)> = slices
        .iter()
        .zip(&labels)
        .map(|(slice, label)| (slice.value, label.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Allocation").subtext("Current value"))
        .tooltip(Tooltip::new().trigger(Trigger::Item).value_formatter(yen_formatter()))
        .legend(Legend::new().bottom("0%").left("center"))
        .series(
            Pie::new()
                .name("Allocation")
                .radius(vec!["45%", "70%"])
                .avoid_label_overlap(false)
                .data(data),
        )
}

#[inline]
fn yen_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const yenFormatter = new Intl.NumberFormat('ja-JP', {
              style: 'currency',
              currency: 'JPY'
            });
            return (number || number === 0) ? yenFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for yen values
fn yen_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(yen_formatter())
}
