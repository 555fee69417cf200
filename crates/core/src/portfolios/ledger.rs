//! Ledger recomputation.
//!
//! Pure functions that keep a holding's derived fields consistent with
//! its transaction log and a portfolio's aggregates consistent with its
//! holdings. Derived values are always rebuilt from scratch, never
//! incrementally adjusted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::portfolios_model::{
    AssetDistribution, Holding, HoldingReturn, Portfolio, PortfolioSummary, TransactionSide,
};
use marketdeck_market_data::AssetKind;

/// Unrealized return for a position against its cost basis.
///
/// A zero average buy price yields a zero percentage rather than a
/// division error.
pub fn holding_return(
    quantity: Decimal,
    current_price: Decimal,
    average_buy_price: Decimal,
) -> HoldingReturn {
    let amount = (current_price - average_buy_price) * quantity;
    let percentage = if average_buy_price.is_zero() {
        Decimal::ZERO
    } else {
        (current_price / average_buy_price - Decimal::ONE) * dec!(100)
    };
    HoldingReturn { amount, percentage }
}

/// Re-derive `value` and `holding_return` from the holding's quantity,
/// average buy price, and last-known market price.
pub fn refresh_valuation(holding: &mut Holding) {
    holding.value = holding.quantity * holding.current_price;
    holding.holding_return = holding_return(
        holding.quantity,
        holding.current_price,
        holding.average_buy_price,
    );
}

/// Rebuild quantity and average buy price from the full transaction list,
/// then refresh the valuation.
///
/// Quantity is total bought minus total sold. The average buy price is
/// cost-weighted over buy transactions only; with no buys on record the
/// previous average stands (sticky cost basis), so deleting every buy
/// never rewrites it.
pub fn recompute_from_transactions(holding: &mut Holding) {
    let mut bought = Decimal::ZERO;
    let mut spent = Decimal::ZERO;
    let mut sold = Decimal::ZERO;

    for tx in &holding.transactions {
        match tx.side {
            TransactionSide::Buy => {
                bought += tx.quantity;
                spent += tx.quantity * tx.price;
            }
            TransactionSide::Sell => sold += tx.quantity,
        }
    }

    holding.quantity = bought - sold;
    if !bought.is_zero() {
        holding.average_buy_price = spent / bought;
    }

    refresh_valuation(holding);
}

/// Aggregate cost basis of a portfolio.
pub fn cost_basis(portfolio: &Portfolio) -> Decimal {
    portfolio
        .holdings
        .iter()
        .map(|h| h.quantity * h.average_buy_price)
        .sum()
}

/// Re-derive the portfolio total, every holding's allocation, and the
/// all-time performance figure.
///
/// Allocations are recomputed for all holdings (not just a mutated one)
/// so the percentages stay mutually consistent; at zero total they are
/// all zero.
pub fn recompute_portfolio(portfolio: &mut Portfolio) {
    let total: Decimal = portfolio.holdings.iter().map(|h| h.value).sum();
    portfolio.total_value = total;

    for holding in &mut portfolio.holdings {
        holding.allocation = if total > Decimal::ZERO {
            holding.value / total * dec!(100)
        } else {
            Decimal::ZERO
        };
    }

    let cost = cost_basis(portfolio);
    portfolio.performance.all_time = if cost > Decimal::ZERO {
        (total / cost - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    };
}

/// Aggregate view of a portfolio: totals, return, and the value split
/// between asset kinds.
pub fn summarize(portfolio: &Portfolio) -> PortfolioSummary {
    let total_value = portfolio.total_value;
    let total_cost = cost_basis(portfolio);
    let total_return = total_value - total_cost;
    let return_percentage = if total_cost > Decimal::ZERO {
        (total_value / total_cost - Decimal::ONE) * dec!(100)
    } else {
        Decimal::ZERO
    };

    let crypto_value: Decimal = portfolio
        .holdings
        .iter()
        .filter(|h| h.asset.kind == AssetKind::Crypto)
        .map(|h| h.value)
        .sum();
    let stock_value: Decimal = portfolio
        .holdings
        .iter()
        .filter(|h| h.asset.kind == AssetKind::Stock)
        .map(|h| h.value)
        .sum();

    let distribution = if total_value > Decimal::ZERO {
        AssetDistribution {
            crypto: crypto_value / total_value * dec!(100),
            stocks: stock_value / total_value * dec!(100),
        }
    } else {
        AssetDistribution::default()
    };

    PortfolioSummary {
        total_value,
        total_cost,
        total_return,
        return_percentage,
        distribution,
    }
}
