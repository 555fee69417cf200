//! Marketdeck Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching for the
//! marketdeck application.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Crypto market listings (CoinGecko, Binance)
//! - A synthetic stock quote generator for exchanges without a free feed
//! - Market news aggregation with generated fallback items
//! - Derived analytics: RSI, volatility, technical/sentiment/prediction
//!   summaries
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  MarketDataService| --> |  snapshot cache  |  (DashMap, per kind)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! | MarketFeedProvider|  (CoinGecko, Binance, synthetic stocks)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   MarketQuote    |  (listing row)
//! +------------------+
//! ```
//!
//! A failed fetch is never retried: the service substitutes generated
//! placeholder rows and the next scheduled poll supersedes them.

pub mod analysis;
pub mod constants;
pub mod errors;
pub mod models;
pub mod news;
pub mod provider;
pub mod service;

pub use errors::MarketDataError;
pub use models::{
    AssetKind, FiatCurrency, HistoricalSeries, MarketQuote, NewsItem, OhlcBar, PricePoint,
};
pub use news::NewsClient;
pub use provider::{
    BinanceProvider, CoinGeckoProvider, MarketFeedProvider, SyntheticStockProvider,
};
pub use service::MarketDataService;
