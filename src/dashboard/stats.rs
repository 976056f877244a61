//! Derived portfolio statistics for the dashboard.
//!
//! Current values come from the most recent portfolio history point, invested
//! amounts are summed from the raw transactions. Both are combined into the
//! per-asset and portfolio-wide figures shown on the stat cards.

use crate::api::{PortfolioPoint, Symbol, Transaction};

/// The dashboard figures for a single asset.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AssetStats {
    /// The asset these figures describe.
    pub symbol: Symbol,
    /// The market value of the holdings, from the latest history point.
    pub current_value: f64,
    /// The total amount invested into this asset.
    pub invested: f64,
    /// The gain or loss relative to the invested amount, in percent.
    pub percentage_change: f64,
}

/// The dashboard figures for the whole portfolio.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PortfolioStats {
    /// Per-asset figures, in [Symbol::ALL] order.
    pub assets: Vec<AssetStats>,
    /// The market value of all holdings.
    pub total_value: f64,
    /// The total amount invested.
    pub total_invested: f64,
    /// The portfolio-wide gain or loss, in percent.
    pub percentage_change: f64,
}

/// Sum the invested amount over all transactions for `symbol`.
///
/// The sum is exact, no rounding happens before display.
pub(super) fn investment_total(transactions: &[Transaction], symbol: Symbol) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.symbol == symbol)
        .map(Transaction::total)
        .sum()
}

/// The gain or loss of `current` relative to `invested`, in percent.
///
/// Defined as zero when nothing was invested, which happens when all
/// holdings were received for free.
pub(super) fn percentage_change(current: f64, invested: f64) -> f64 {
    if invested == 0.0 {
        return 0.0;
    }

    (current - invested) / invested * 100.0
}

/// Combine the transactions and the latest history point into the figures
/// shown on the dashboard.
pub(super) fn portfolio_stats(
    transactions: &[Transaction],
    latest: &PortfolioPoint,
) -> PortfolioStats {
    let assets = Symbol::ALL
        .iter()
        .map(|&symbol| {
            let invested = investment_total(transactions, symbol);
            let current_value = latest.value_of(symbol);

            AssetStats {
                symbol,
                current_value,
                invested,
                percentage_change: percentage_change(current_value, invested),
            }
        })
        .collect();

    let total_invested = transactions.iter().map(Transaction::total).sum();

    PortfolioStats {
        assets,
        total_value: latest.total_value,
        total_invested,
        percentage_change: percentage_change(latest.total_value, total_invested),
    }
}

#[cfg(test)]
mod stats_tests {
    use time::macros::{date, datetime};

    use crate::api::{PortfolioPoint, Symbol, Transaction};

    use super::{investment_total, percentage_change, portfolio_stats};

    fn transaction(symbol: Symbol, amount: f64, price: f64) -> Transaction {
        Transaction {
            id: 0,
            symbol,
            amount,
            price_at_purchase: price,
            purchased_at: datetime!(2024-01-01 00:00 UTC),
            created_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn percentage_change_is_zero_when_nothing_invested() {
        assert_eq!(percentage_change(1_000_000.0, 0.0), 0.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_change_is_relative_to_invested_amount() {
        assert_eq!(percentage_change(150.0, 100.0), 50.0);
        assert_eq!(percentage_change(50.0, 100.0), -50.0);
        assert_eq!(percentage_change(100.0, 100.0), 0.0);
    }

    #[test]
    fn investment_total_sums_only_matching_transactions() {
        let transactions = vec![
            transaction(Symbol::BTC, 0.5, 5_000_000.0),
            transaction(Symbol::ETH, 2.0, 400_000.0),
            transaction(Symbol::BTC, 0.1, 6_000_000.0),
        ];

        assert_eq!(
            investment_total(&transactions, Symbol::BTC),
            0.5 * 5_000_000.0 + 0.1 * 6_000_000.0
        );
        assert_eq!(investment_total(&transactions, Symbol::ETH), 800_000.0);
    }

    #[test]
    fn investment_total_is_exact() {
        // Sums must not be rounded before display.
        let transactions = vec![
            transaction(Symbol::BTC, 0.1, 3.0),
            transaction(Symbol::BTC, 0.2, 3.0),
        ];

        assert_eq!(
            investment_total(&transactions, Symbol::BTC),
            0.1 * 3.0 + 0.2 * 3.0
        );
    }

    #[test]
    fn portfolio_stats_combines_transactions_and_latest_point() {
        let transactions = vec![
            transaction(Symbol::BTC, 0.5, 5_000_000.0),
            transaction(Symbol::ETH, 1.0, 0.0),
        ];
        let latest = PortfolioPoint {
            date: date!(2024 - 06 - 01),
            total_value: 3_400_000.0,
            total_investment: 2_500_000.0,
            btc_value: 3_000_000.0,
            eth_value: 400_000.0,
        };

        let stats = portfolio_stats(&transactions, &latest);

        assert_eq!(stats.total_value, 3_400_000.0);
        assert_eq!(stats.total_invested, 2_500_000.0);
        assert_eq!(stats.percentage_change, 36.0);

        let btc = &stats.assets[0];
        assert_eq!(btc.symbol, Symbol::BTC);
        assert_eq!(btc.invested, 2_500_000.0);
        assert_eq!(btc.percentage_change, 20.0);

        // All ETH holdings were free, so the change is pinned to zero.
        let eth = &stats.assets[1];
        assert_eq!(eth.symbol, Symbol::ETH);
        assert_eq!(eth.invested, 0.0);
        assert_eq!(eth.percentage_change, 0.0);
    }
}
