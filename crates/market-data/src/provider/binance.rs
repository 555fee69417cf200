//! Binance provider implementation.
//!
//! Fetches per-pair 24hr tickers for the fixed pair universe and derives
//! INR prices through a stablecoin probe. Pairs are priced in USDT; the
//! INR path multiplies the probe price by a static factor, and the same
//! factor is the hard fallback when the probe itself fails.

use async_trait::async_trait;
use futures::future::join_all;
use log::warn;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{BINANCE_API_BASE, CRYPTO_PAIRS};
use crate::errors::MarketDataError;
use crate::models::{AssetKind, FiatCurrency, MarketQuote};
use crate::provider::MarketFeedProvider;

const PROVIDER_ID: &str = "BINANCE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Symbol probed for the USD->INR conversion path.
const USD_RATE_PROBE_SYMBOL: &str = "USDTBUSD";

/// Response from the `/ticker/price` endpoint.
#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: String,
}

/// Response from the `/ticker/24hr` endpoint. Binance returns all numbers
/// as strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24h {
    last_price: String,
    price_change_percent: String,
    volume: String,
    high_price: String,
    low_price: String,
}

/// Parsed 24hr statistics for one pair.
#[derive(Debug, Clone, Copy)]
pub struct PairStats {
    pub last_price: Decimal,
    pub price_change_percent: Decimal,
    pub volume: Decimal,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, MarketDataError> {
    value
        .parse::<Decimal>()
        .map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("field {}: {}", field, e),
        })
}

/// Binance provider for the fixed crypto pair universe.
pub struct BinanceProvider {
    client: Client,
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BinanceProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// USD to INR conversion rate.
    ///
    /// Probes a stablecoin pair and scales by the static factor; returns
    /// the factor alone when the probe fails.
    pub async fn usd_inr_rate(&self) -> Decimal {
        match self.probe_usd_rate().await {
            Ok(rate) => rate,
            Err(e) => {
                warn!("USD/INR probe failed, using static rate: {}", e);
                dec!(82.5)
            }
        }
    }

    async fn probe_usd_rate(&self) -> Result<Decimal, MarketDataError> {
        let url = format!(
            "{}/ticker/price?symbol={}",
            BINANCE_API_BASE, USD_RATE_PROBE_SYMBOL
        );
        let ticker: TickerPrice = self.get_json(&url).await?;
        let probe = parse_decimal("price", &ticker.price)?;
        Ok(probe * dec!(82.5))
    }

    /// 24hr statistics for one trading pair.
    pub async fn ticker_24h(&self, symbol: &str) -> Result<PairStats, MarketDataError> {
        let url = format!("{}/ticker/24hr?symbol={}", BINANCE_API_BASE, symbol);
        let ticker: Ticker24h = self.get_json(&url).await?;

        Ok(PairStats {
            last_price: parse_decimal("lastPrice", &ticker.last_price)?,
            price_change_percent: parse_decimal("priceChangePercent", &ticker.price_change_percent)?,
            volume: parse_decimal("volume", &ticker.volume)?,
            high_24h: parse_decimal("highPrice", &ticker.high_price)?,
            low_24h: parse_decimal("lowPrice", &ticker.low_price)?,
        })
    }

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
}

#[async_trait]
impl MarketFeedProvider for BinanceProvider {
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
        let rate = match currency {
            FiatCurrency::Usd => Decimal::ONE,
            FiatCurrency::Inr => self.usd_inr_rate().await,
        };

        let fetches = CRYPTO_PAIRS
            .iter()
            .map(|pair| async move { (pair, self.ticker_24h(pair.symbol).await) });
        let results = join_all(fetches).await;

        // Pairs that fail to fetch are dropped from this poll; the next
        // refresh picks them up again.
        let quotes = results
            .into_iter()
            .filter_map(|(pair, result)| match result {
                Ok(stats) => Some(MarketQuote {
                    id: pair.display_symbol.to_lowercase(),
                    symbol: pair.display_symbol.to_string(),
                    name: pair.name.to_string(),
                    current_price: stats.last_price * rate,
                    price_change_percentage_24h: stats.price_change_percent,
                    market_cap: stats.last_price * stats.volume * rate,
                    circulating_supply: Decimal::ZERO,
                    total_volume: stats.volume,
                    market_cap_rank: 0,
                }),
                Err(e) => {
                    warn!("Failed to fetch {}: {}", pair.symbol, e);
                    None
                }
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_24h_parses_string_numbers() {
        let json = r#"{
            "lastPrice": "64250.10",
            "priceChangePercent": "-1.25",
            "volume": "12345.6",
            "highPrice": "65000.00",
            "lowPrice": "63000.00",
            "symbol": "BTCUSDT"
        }"#;

        let ticker: Ticker24h = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.last_price, "64250.10");

        let price = parse_decimal("lastPrice", &ticker.last_price).unwrap();
        assert_eq!(price, rust_decimal_macros::dec!(64250.10));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        let err = parse_decimal("lastPrice", "not-a-number").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse { .. }));
    }
}
