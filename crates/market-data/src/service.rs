//! Aggregate market data service with a snapshot cache.

use std::sync::Arc;

use dashmap::DashMap;
use log::warn;

use crate::analysis::{
    price_prediction, sentiment_summary, technical_summary, PricePrediction, SentimentSummary,
    TechnicalSummary,
};
use crate::models::{AssetKind, FiatCurrency, HistoricalSeries, MarketQuote, NewsItem};
use crate::news::NewsClient;
use crate::provider::{mock, CoinGeckoProvider, MarketFeedProvider, SyntheticStockProvider};

/// Rows generated when a listing fetch fails.
const PLACEHOLDER_ROWS: usize = 20;

/// Facade over the listing providers, the news feed, and the per-asset
/// analytics.
///
/// Listings are cached per (kind, currency); `refresh` repopulates a slot
/// and `markets` serves the last snapshot, fetching on a cold slot. A
/// failed fetch is substituted with generated placeholder rows; callers
/// cannot tell the difference, and the next poll replaces them.
pub struct MarketDataService {
    crypto: Arc<dyn MarketFeedProvider>,
    stocks: Arc<dyn MarketFeedProvider>,
    coingecko: Arc<CoinGeckoProvider>,
    news: NewsClient,
    cache: DashMap<(AssetKind, FiatCurrency), Vec<MarketQuote>>,
}

impl Default for MarketDataService {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDataService {
    /// Service over the default provider set: CoinGecko for crypto, the
    /// synthetic generator for stocks.
    pub fn new() -> Self {
        let coingecko = Arc::new(CoinGeckoProvider::new());
        Self {
            crypto: coingecko.clone(),
            stocks: Arc::new(SyntheticStockProvider::new()),
            coingecko,
            news: NewsClient::new(),
            cache: DashMap::new(),
        }
    }

    /// Service with explicit providers, for swapping the crypto feed or
    /// injecting a test double.
    pub fn with_providers(
        crypto: Arc<dyn MarketFeedProvider>,
        stocks: Arc<dyn MarketFeedProvider>,
        coingecko: Arc<CoinGeckoProvider>,
    ) -> Self {
        Self {
            crypto,
            stocks,
            coingecko,
            news: NewsClient::new(),
            cache: DashMap::new(),
        }
    }

    fn provider(&self, kind: AssetKind) -> &dyn MarketFeedProvider {
        match kind {
            AssetKind::Crypto => self.crypto.as_ref(),
            AssetKind::Stock => self.stocks.as_ref(),
        }
    }

    /// Re-fetch one listing slot and cache the result.
    ///
    /// Failures (and empty listings) are replaced with placeholder rows so
    /// the slot always holds something renderable.
    pub async fn refresh(&self, kind: AssetKind, currency: FiatCurrency) -> Vec<MarketQuote> {
        let provider = self.provider(kind);
        let quotes = match provider.fetch_markets(currency).await {
            Ok(quotes) if !quotes.is_empty() => quotes,
            Ok(_) => {
                warn!("{} returned an empty listing, using placeholders", provider.id());
                mock::placeholder_quotes(kind, PLACEHOLDER_ROWS)
            }
            Err(e) => {
                warn!("{} listing fetch failed, using placeholders: {}", provider.id(), e);
                mock::placeholder_quotes(kind, PLACEHOLDER_ROWS)
            }
        };

        self.cache.insert((kind, currency), quotes.clone());
        quotes
    }

    /// The current listing snapshot, fetching if this slot is cold.
    pub async fn markets(&self, kind: AssetKind, currency: FiatCurrency) -> Vec<MarketQuote> {
        if let Some(snapshot) = self.cache.get(&(kind, currency)) {
            return snapshot.value().clone();
        }
        self.refresh(kind, currency).await
    }

    /// The merged news feed; empty on failure.
    pub async fn news(&self) -> Vec<NewsItem> {
        self.news.fetch_market_news().await
    }

    /// Daily price history for one crypto asset; `None` on failure.
    pub async fn history(&self, asset_id: &str, days: u32) -> Option<HistoricalSeries> {
        match self.coingecko.market_chart(asset_id, days).await {
            Ok(series) => Some(series),
            Err(e) => {
                warn!("History fetch failed for {}: {}", asset_id, e);
                None
            }
        }
    }

    /// Technical summary for one crypto asset; `None` on failure.
    pub async fn technical(&self, asset_id: &str) -> Option<TechnicalSummary> {
        match technical_summary(&self.coingecko, asset_id).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Technical analysis failed for {}: {}", asset_id, e);
                None
            }
        }
    }

    /// Sentiment summary for one crypto asset; `None` on failure.
    pub async fn sentiment(&self, asset_id: &str) -> Option<SentimentSummary> {
        match sentiment_summary(&self.coingecko, asset_id).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Sentiment analysis failed for {}: {}", asset_id, e);
                None
            }
        }
    }

    /// Price projection for one crypto asset; `None` on failure.
    pub async fn prediction(&self, asset_id: &str) -> Option<PricePrediction> {
        match price_prediction(&self.coingecko, asset_id).await {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!("Price prediction failed for {}: {}", asset_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MarketDataError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FailingProvider;

    #[async_trait]
    impl MarketFeedProvider for FailingProvider {
        fn id(&self) -> &'static str {
            "FAILING"
        }

        fn kind(&self) -> AssetKind {
            AssetKind::Crypto
        }

        async fn fetch_markets(
            &self,
            _currency: FiatCurrency,
        ) -> Result<Vec<MarketQuote>, MarketDataError> {
            Err(MarketDataError::ProviderError {
                provider: "FAILING".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    struct FixedProvider;

    #[async_trait]
    impl MarketFeedProvider for FixedProvider {
        fn id(&self) -> &'static str {
            "FIXED"
        }

        fn kind(&self) -> AssetKind {
            AssetKind::Stock
        }

        async fn fetch_markets(
            &self,
            _currency: FiatCurrency,
        ) -> Result<Vec<MarketQuote>, MarketDataError> {
            Ok(vec![MarketQuote {
                id: "acme".to_string(),
                symbol: "ACME".to_string(),
                name: "Acme Corp".to_string(),
                current_price: dec!(123.45),
                price_change_percentage_24h: dec!(1.0),
                market_cap: dec!(1000),
                circulating_supply: dec!(0),
                total_volume: dec!(10),
                market_cap_rank: 1,
            }])
        }
    }

    fn service() -> MarketDataService {
        MarketDataService::with_providers(
            Arc::new(FailingProvider),
            Arc::new(FixedProvider),
            Arc::new(CoinGeckoProvider::new()),
        )
    }

    #[tokio::test]
    async fn test_failed_fetch_substitutes_placeholders() {
        let service = service();
        let quotes = service.markets(AssetKind::Crypto, FiatCurrency::Usd).await;
        assert_eq!(quotes.len(), PLACEHOLDER_ROWS);
        assert!(quotes[0].id.starts_with("crypto-"));
    }

    #[tokio::test]
    async fn test_successful_fetch_is_cached() {
        let service = service();
        let first = service.markets(AssetKind::Stock, FiatCurrency::Inr).await;
        assert_eq!(first[0].id, "acme");

        let cached = service.markets(AssetKind::Stock, FiatCurrency::Inr).await;
        assert_eq!(cached[0].current_price, dec!(123.45));
    }

    #[tokio::test]
    async fn test_cache_is_keyed_by_currency() {
        let service = service();
        service.markets(AssetKind::Stock, FiatCurrency::Inr).await;
        assert!(service.cache.get(&(AssetKind::Stock, FiatCurrency::Usd)).is_none());
        assert!(service.cache.get(&(AssetKind::Stock, FiatCurrency::Inr)).is_some());
    }
}
