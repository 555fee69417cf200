//! CoinGecko provider implementation.
//!
//! Serves the top-50 crypto listing and the per-asset endpoints the
//! analysis services build on.
//!
//! # API Endpoints
//!
//! - Listing: `/coins/markets?vs_currency={c}&order=market_cap_desc&per_page=50`
//! - OHLC candles: `/coins/{id}/ohlc?vs_currency=usd&days={d}`
//! - Daily chart: `/coins/{id}/market_chart?vs_currency=usd&days={d}&interval=daily`
//! - Community sentiment: `/coins/{id}` with community_data enabled

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::COINGECKO_API_BASE;
use crate::errors::MarketDataError;
use crate::models::{AssetKind, FiatCurrency, HistoricalSeries, MarketQuote, OhlcBar, PricePoint};
use crate::provider::MarketFeedProvider;

const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One row of the `/coins/markets` listing. Numeric fields are nullable in
/// the upstream payload.
#[derive(Debug, Deserialize)]
struct CoinMarketRow {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<Decimal>,
    price_change_percentage_24h: Option<Decimal>,
    market_cap: Option<Decimal>,
    circulating_supply: Option<Decimal>,
    total_volume: Option<Decimal>,
    market_cap_rank: Option<u32>,
}

/// Response from the `market_chart` endpoint: `prices` is an array of
/// `[unix_millis, price]` pairs.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(i64, f64)>,
}

/// Subset of the `/coins/{id}` detail payload used for sentiment.
#[derive(Debug, Deserialize)]
struct CoinDetail {
    sentiment_votes_up_percentage: Option<f64>,
}

/// CoinGecko provider for crypto listings and per-asset series.
pub struct CoinGeckoProvider {
    client: Client,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// GET a JSON payload, mapping HTTP failures and decode failures to
    /// typed errors.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, MarketDataError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP error: {}", response.status()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// 14-day OHLC candles for one asset, priced in USD.
    pub async fn ohlc(&self, asset_id: &str, days: u32) -> Result<Vec<OhlcBar>, MarketDataError> {
        let url = format!(
            "{}/coins/{}/ohlc?vs_currency=usd&days={}",
            COINGECKO_API_BASE,
            asset_id.to_lowercase(),
            days
        );
        let rows: Vec<(i64, f64, f64, f64, f64)> = self.get_json(&url).await?;

        let bars = rows
            .into_iter()
            .filter_map(|(ts, open, high, low, close)| {
                let timestamp = Utc.timestamp_millis_opt(ts).single()?;
                Some(OhlcBar {
                    timestamp,
                    open: Decimal::from_f64(open)?,
                    high: Decimal::from_f64(high)?,
                    low: Decimal::from_f64(low)?,
                    close: Decimal::from_f64(close)?,
                })
            })
            .collect();

        Ok(bars)
    }

    /// Daily price series for one asset, priced in USD.
    pub async fn market_chart(
        &self,
        asset_id: &str,
        days: u32,
    ) -> Result<HistoricalSeries, MarketDataError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
            COINGECKO_API_BASE,
            asset_id.to_lowercase(),
            days
        );
        let chart: MarketChartResponse = self.get_json(&url).await?;

        let prices = chart
            .prices
            .into_iter()
            .filter_map(|(ts, price)| {
                let timestamp = Utc.timestamp_millis_opt(ts).single()?;
                Some(PricePoint {
                    timestamp,
                    price: Decimal::from_f64(price)?,
                })
            })
            .collect();

        Ok(HistoricalSeries { prices })
    }

    /// Percentage of community votes that are positive for this asset.
    pub async fn sentiment_votes_up(&self, asset_id: &str) -> Result<Decimal, MarketDataError> {
        let url = format!(
            "{}/coins/{}?localization=false&tickers=false&community_data=true&developer_data=false&sparkline=false",
            COINGECKO_API_BASE,
            asset_id.to_lowercase()
        );
        let detail: CoinDetail = self.get_json(&url).await?;

        detail
            .sentiment_votes_up_percentage
            .and_then(Decimal::from_f64)
            .ok_or_else(|| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("no sentiment votes for {}", asset_id),
            })
    }
}

#[async_trait]
impl MarketFeedProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Crypto
    }

    async fn fetch_markets(
        &self,
        currency: FiatCurrency,
    ) -> Result<Vec<MarketQuote>, MarketDataError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page=50&sparkline=false&price_change_percentage=24h",
            COINGECKO_API_BASE,
            currency.vs_currency()
        );
        let rows: Vec<CoinMarketRow> = self.get_json(&url).await?;

        let quotes = rows
            .into_iter()
            .map(|row| MarketQuote {
                id: row.id,
                symbol: row.symbol.to_uppercase(),
                name: row.name,
                current_price: row.current_price.unwrap_or_default(),
                price_change_percentage_24h: row.price_change_percentage_24h.unwrap_or_default(),
                market_cap: row.market_cap.unwrap_or_default(),
                circulating_supply: row.circulating_supply.unwrap_or_default(),
                total_volume: row.total_volume.unwrap_or_default(),
                market_cap_rank: row.market_cap_rank.unwrap_or_default(),
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_row_parses_with_nulls() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 64250.1,
            "price_change_percentage_24h": null,
            "market_cap": 1250000000,
            "circulating_supply": null,
            "total_volume": 35000000,
            "market_cap_rank": 1
        }"#;

        let row: CoinMarketRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "bitcoin");
        assert_eq!(row.current_price, Some(dec!(64250.1)));
        assert_eq!(row.price_change_percentage_24h, None);
        assert_eq!(row.market_cap_rank, Some(1));
    }

    #[test]
    fn test_market_chart_parses_pairs() {
        let json = r#"{"prices": [[1735689600000, 93500.5], [1735776000000, 94100.0]]}"#;
        let chart: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].0, 1735689600000);
    }
}
