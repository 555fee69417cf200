//! Ledger error types.

use thiserror::Error;

/// Errors raised by ledger operations.
///
/// The ledger validates existence only; value-level validation (negative
/// quantities, overselling, zero prices) is a presentation concern.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Portfolio not found: {0}")]
    PortfolioNotFound(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
}
