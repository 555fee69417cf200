//! Market feed provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{AssetKind, FiatCurrency, MarketQuote};

/// Trait for market listing providers.
///
/// Implement this trait to add support for a new listing source. A
/// provider serves exactly one asset kind; the aggregate service picks the
/// provider by kind and substitutes placeholder rows when a fetch fails.
#[async_trait]
pub trait MarketFeedProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO", "BINANCE", etc.
    /// Used in log lines and error messages.
    fn id(&self) -> &'static str;

    /// The asset kind this provider serves.
    fn kind(&self) -> AssetKind;

    /// Fetch the current market listing.
    ///
    /// # Arguments
    ///
    /// * `currency` - The currency prices should be expressed in. Providers
    ///   that generate base-currency prices may ignore this; conversion
    ///   then happens at display time.
    ///
    /// # Returns
    ///
    /// Listing rows ordered the way the source orders them, or a
    /// `MarketDataError` on failure.
    async fn fetch_markets(
        &self,
        currency: FiatCurrency,
    ) -> Result<Vec<MarketQuote>, MarketDataError>;
}
