//! Ledger store and service traits.
//!
//! These traits define the contract for ledger operations without any
//! storage-specific types, allowing for different persistence
//! implementations.

use super::portfolios_model::{
    Holding, HoldingUpdate, NewHolding, NewTransaction, Portfolio, PortfolioState,
    PortfolioSummary, PortfolioUpdate, Transaction, TransactionUpdate,
};
use crate::errors::Result;

/// Persistence contract for the ledger document.
///
/// The whole state is written as one document; there is no partial
/// update at the storage layer.
pub trait PortfolioStoreTrait: Send + Sync {
    /// Loads the persisted state, or the default empty state when nothing
    /// has been persisted yet.
    fn load(&self) -> Result<PortfolioState>;

    /// Persists the full state document.
    fn save(&self, state: &PortfolioState) -> Result<()>;
}

/// Contract for ledger operations.
///
/// Every mutation is synchronous and atomic from the caller's
/// perspective: when a call returns, all derived fields (value, return,
/// allocation, total value) are consistent with the then-current
/// transaction logs, and the state has been persisted.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Creates a portfolio with empty holdings and zeroed performance and
    /// makes it the active one. Duplicate-name checking is the caller's
    /// concern.
    fn create_portfolio(
        &self,
        name: &str,
        currency: &str,
        description: Option<String>,
    ) -> Result<Portfolio>;

    /// Patches name/description/currency in place.
    fn update_portfolio(&self, id: &str, update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio; deselects it if it was active.
    fn delete_portfolio(&self, id: &str) -> Result<()>;

    /// Selects the active portfolio, or clears the selection.
    fn set_active_portfolio(&self, id: Option<&str>) -> Result<()>;

    fn get_portfolio(&self, id: &str) -> Result<Portfolio>;

    fn list_portfolios(&self) -> Result<Vec<Portfolio>>;

    /// The currently selected portfolio, if any.
    fn active_portfolio(&self) -> Result<Option<Portfolio>>;

    /// Opens a position. Re-derives every holding's allocation, not just
    /// the new one.
    fn add_holding(&self, portfolio_id: &str, draft: NewHolding) -> Result<Holding>;

    /// Patches a holding's quantity/average price/market price and runs
    /// the recomputation cascade.
    fn update_holding(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        patch: HoldingUpdate,
    ) -> Result<Holding>;

    /// Deletes a holding and all of its transactions.
    fn remove_holding(&self, portfolio_id: &str, holding_id: &str) -> Result<()>;

    /// Appends a transaction and recomputes the holding from its full
    /// transaction list.
    fn add_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        tx: NewTransaction,
    ) -> Result<Transaction>;

    /// Patches a transaction; same recomputation cascade as
    /// `add_transaction`.
    fn update_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        transaction_id: &str,
        patch: TransactionUpdate,
    ) -> Result<Transaction>;

    /// Removes a transaction; same recomputation cascade as
    /// `add_transaction`.
    fn remove_transaction(
        &self,
        portfolio_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<()>;

    /// Aggregate totals and asset-kind distribution for one portfolio.
    fn summary(&self, portfolio_id: &str) -> Result<PortfolioSummary>;
}
