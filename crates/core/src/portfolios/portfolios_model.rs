//! Ledger domain models.
//!
//! Serialized field names are camelCase (with `type` for the asset kind
//! and transaction side) so the persisted document keeps the dashboard's
//! original storage format.

use chrono::{DateTime, Utc};
use marketdeck_market_data::AssetKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptor of the asset a holding tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    /// External asset id, e.g. "bitcoin" or "reliance"
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSide {
    Buy,
    Sell,
}

/// A single buy or sell against a holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub side: TransactionSide,
    pub quantity: Decimal,
    /// Unit price at execution
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Unrealized profit or loss of a holding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingReturn {
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// A single asset position within a portfolio.
///
/// `quantity` and `average_buy_price` are recomputed from the transaction
/// list after every transaction mutation; `value`, `allocation`, and
/// `holding_return` are derived from them and the last-known market price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub asset: AssetRef,
    pub quantity: Decimal,
    pub average_buy_price: Decimal,
    /// Last-known market price; transactions never update it
    pub current_price: Decimal,
    pub value: Decimal,
    /// Percentage of the parent portfolio's total value
    pub allocation: Decimal,
    #[serde(rename = "return")]
    pub holding_return: HoldingReturn,
    pub transactions: Vec<Transaction>,
}

/// Percentage change over the fixed lookback windows.
///
/// Only `all_time` is derived (from cost basis); the timeframe fields stay
/// zero because no historical value snapshots are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    pub all_time: Decimal,
    pub today: Decimal,
    pub week: Decimal,
    pub month: Decimal,
    pub year: Decimal,
}

/// A user-defined simulated portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Always the sum of the holdings' values, never stored independently
    pub total_value: Decimal,
    /// Display currency code
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub holdings: Vec<Holding>,
    pub performance: PortfolioPerformance,
}

/// The persisted ledger document: `{ portfolios, activePortfolioId }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    pub portfolios: Vec<Portfolio>,
    pub active_portfolio_id: Option<String>,
}

/// Input model for opening a new position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub asset: AssetRef,
    pub quantity: Decimal,
    pub average_buy_price: Decimal,
    pub current_price: Decimal,
}

/// Patch model for an existing holding. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub quantity: Option<Decimal>,
    pub average_buy_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

/// Input model for recording a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub side: TransactionSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub fee: Option<Decimal>,
    pub notes: Option<String>,
}

/// Patch model for an existing transaction. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub side: Option<TransactionSide>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fee: Option<Decimal>,
    pub notes: Option<String>,
}

/// Patch model for portfolio metadata. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
}

/// Value split between the two asset kinds, as percentages of total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDistribution {
    pub crypto: Decimal,
    pub stocks: Decimal,
}

/// Aggregate view of one portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return: Decimal,
    pub return_percentage: Decimal,
    pub distribution: AssetDistribution,
}
