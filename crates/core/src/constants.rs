//! Shared constants.

/// Storage key for the ledger document.
pub const PORTFOLIO_STORE_KEY: &str = "portfolio-store";

/// Storage key for the watchlist and display preferences document.
pub const MARKET_PREFS_STORE_KEY: &str = "market-store";
