//! Tests for the ledger recomputation functions.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ledger::{
    holding_return, recompute_from_transactions, recompute_portfolio, summarize,
};
use super::portfolios_model::{
    AssetRef, Holding, Portfolio, PortfolioPerformance, Transaction, TransactionSide,
};
use marketdeck_market_data::AssetKind;

fn asset(kind: AssetKind) -> AssetRef {
    AssetRef {
        id: "test-asset".to_string(),
        symbol: "TST".to_string(),
        name: "Test Asset".to_string(),
        kind,
    }
}

fn transaction(side: TransactionSide, quantity: Decimal, price: Decimal) -> Transaction {
    Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        date: Utc::now(),
        side,
        quantity,
        price,
        fee: None,
        notes: None,
    }
}

fn holding(current_price: Decimal, transactions: Vec<Transaction>) -> Holding {
    Holding {
        id: uuid::Uuid::new_v4().to_string(),
        asset: asset(AssetKind::Crypto),
        quantity: Decimal::ZERO,
        average_buy_price: Decimal::ZERO,
        current_price,
        value: Decimal::ZERO,
        allocation: Decimal::ZERO,
        holding_return: Default::default(),
        transactions,
    }
}

fn portfolio(holdings: Vec<Holding>) -> Portfolio {
    Portfolio {
        id: "p1".to_string(),
        name: "Test".to_string(),
        description: None,
        total_value: Decimal::ZERO,
        currency: "INR".to_string(),
        created_at: Utc::now(),
        last_updated: Utc::now(),
        holdings,
        performance: PortfolioPerformance::default(),
    }
}

#[test]
fn test_average_buy_price_is_cost_weighted() {
    // buy 10 @ 100 then buy 10 @ 200 -> average 150, quantity 20
    let mut h = holding(
        dec!(200),
        vec![
            transaction(TransactionSide::Buy, dec!(10), dec!(100)),
            transaction(TransactionSide::Buy, dec!(10), dec!(200)),
        ],
    );
    recompute_from_transactions(&mut h);

    assert_eq!(h.quantity, dec!(20));
    assert_eq!(h.average_buy_price, dec!(150));
}

#[test]
fn test_sells_reduce_quantity_but_not_average() {
    // same holding, then sell 5 @ 300 -> quantity 15, average unchanged
    let mut h = holding(
        dec!(300),
        vec![
            transaction(TransactionSide::Buy, dec!(10), dec!(100)),
            transaction(TransactionSide::Buy, dec!(10), dec!(200)),
            transaction(TransactionSide::Sell, dec!(5), dec!(300)),
        ],
    );
    recompute_from_transactions(&mut h);

    assert_eq!(h.quantity, dec!(15));
    assert_eq!(h.average_buy_price, dec!(150));
    assert_eq!(h.value, dec!(4500));
}

#[test]
fn test_average_is_sticky_with_no_buys() {
    // With only sells on record, the previous average stands.
    let mut h = holding(dec!(100), vec![transaction(TransactionSide::Sell, dec!(3), dec!(90))]);
    h.average_buy_price = dec!(80);
    recompute_from_transactions(&mut h);

    assert_eq!(h.quantity, dec!(-3));
    assert_eq!(h.average_buy_price, dec!(80));
}

#[test]
fn test_quantity_rebuilt_from_full_list() {
    let mut h = holding(
        dec!(10),
        vec![
            transaction(TransactionSide::Buy, dec!(5), dec!(10)),
            transaction(TransactionSide::Sell, dec!(2), dec!(12)),
            transaction(TransactionSide::Buy, dec!(1), dec!(11)),
        ],
    );
    // Seed a drifted quantity; the recompute must overwrite it.
    h.quantity = dec!(999);
    recompute_from_transactions(&mut h);

    assert_eq!(h.quantity, dec!(4));
}

#[test]
fn test_holding_return_against_cost_basis() {
    let ret = holding_return(dec!(20), dec!(200), dec!(150));
    assert_eq!(ret.amount, dec!(1000));
    // 200/150 - 1 = 33.33..%
    assert!((ret.percentage - dec!(33.3333)).abs() < dec!(0.01));
}

#[test]
fn test_holding_return_with_zero_cost_basis() {
    let ret = holding_return(dec!(5), dec!(100), dec!(0));
    assert_eq!(ret.amount, dec!(500));
    assert_eq!(ret.percentage, dec!(0));
}

#[test]
fn test_allocations_are_value_weighted() {
    // values 300 and 700 in a 1000 portfolio -> 30% and 70%
    let mut h1 = holding(dec!(3), vec![transaction(TransactionSide::Buy, dec!(100), dec!(2))]);
    let mut h2 = holding(dec!(7), vec![transaction(TransactionSide::Buy, dec!(100), dec!(5))]);
    recompute_from_transactions(&mut h1);
    recompute_from_transactions(&mut h2);

    let mut p = portfolio(vec![h1, h2]);
    recompute_portfolio(&mut p);

    assert_eq!(p.total_value, dec!(1000));
    assert_eq!(p.holdings[0].allocation, dec!(30));
    assert_eq!(p.holdings[1].allocation, dec!(70));

    let allocation_sum: Decimal = p.holdings.iter().map(|h| h.allocation).sum();
    assert_eq!(allocation_sum, dec!(100));
}

#[test]
fn test_zero_total_value_zeroes_allocations() {
    let mut h = holding(dec!(0), Vec::new());
    h.allocation = dec!(55);
    let mut p = portfolio(vec![h]);
    recompute_portfolio(&mut p);

    assert_eq!(p.total_value, dec!(0));
    assert_eq!(p.holdings[0].allocation, dec!(0));
}

#[test]
fn test_all_time_performance_tracks_cost_basis() {
    let mut h = holding(dec!(150), vec![transaction(TransactionSide::Buy, dec!(10), dec!(100))]);
    recompute_from_transactions(&mut h);
    let mut p = portfolio(vec![h]);
    recompute_portfolio(&mut p);

    assert_eq!(p.performance.all_time, dec!(50));
    assert_eq!(p.performance.today, dec!(0));
    assert_eq!(p.performance.year, dec!(0));
}

#[test]
fn test_summary_distribution_splits_by_kind() {
    let mut crypto = holding(dec!(3), vec![transaction(TransactionSide::Buy, dec!(100), dec!(2))]);
    recompute_from_transactions(&mut crypto);

    let mut stock = holding(dec!(7), vec![transaction(TransactionSide::Buy, dec!(100), dec!(5))]);
    stock.asset = asset(AssetKind::Stock);
    recompute_from_transactions(&mut stock);

    let mut p = portfolio(vec![crypto, stock]);
    recompute_portfolio(&mut p);
    let summary = summarize(&p);

    assert_eq!(summary.total_value, dec!(1000));
    assert_eq!(summary.total_cost, dec!(700));
    assert_eq!(summary.total_return, dec!(300));
    assert!((summary.return_percentage - dec!(42.8571)).abs() < dec!(0.01));
    assert_eq!(summary.distribution.crypto, dec!(30));
    assert_eq!(summary.distribution.stocks, dec!(70));
}

#[test]
fn test_summary_of_empty_portfolio_is_zeroed() {
    let p = portfolio(Vec::new());
    let summary = summarize(&p);

    assert_eq!(summary.total_value, dec!(0));
    assert_eq!(summary.return_percentage, dec!(0));
    assert_eq!(summary.distribution.crypto, dec!(0));
    assert_eq!(summary.distribution.stocks, dec!(0));
}
