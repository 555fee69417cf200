//! The portfolio ledger: simulated portfolios, holdings, and their
//! transaction histories, with derived valuation kept in sync on every
//! mutation.

pub mod ledger;
mod portfolios_errors;
mod portfolios_model;
mod portfolios_service;
mod portfolios_traits;

#[cfg(test)]
mod ledger_tests;

pub use portfolios_errors::PortfolioError;
pub use portfolios_model::{
    AssetDistribution, AssetRef, Holding, HoldingReturn, HoldingUpdate, NewHolding,
    NewTransaction, Portfolio, PortfolioPerformance, PortfolioState, PortfolioSummary,
    PortfolioUpdate, Transaction, TransactionSide, TransactionUpdate,
};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioServiceTrait, PortfolioStoreTrait};
