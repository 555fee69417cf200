//! Derived market analytics.
//!
//! Everything here is computed from the per-asset CoinGecko endpoints:
//! indicator arithmetic in [`calculations`], and the three dashboard
//! summaries built on top of it.

pub mod calculations;
mod prediction;
mod sentiment;
mod technical;

pub use calculations::{rsi, rsi_interpretation, volatility};
pub use prediction::{price_prediction, PricePrediction, RiskBand};
pub use sentiment::{sentiment_summary, MarketBias, Outlook, SentimentLevel, SentimentSummary};
pub use technical::{technical_summary, TechnicalSummary, Trend};
