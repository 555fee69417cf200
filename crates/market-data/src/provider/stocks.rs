//! Synthetic stock quote generator.
//!
//! There is no free real-time feed for the listed exchanges, so this
//! provider serves the fixed stock universe with generated prices. Prices
//! are generated in the base currency regardless of the requested one;
//! conversion happens at display time so consecutive polls stay
//! comparable.

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::constants::INDIAN_STOCKS;
use crate::errors::MarketDataError;
use crate::models::{AssetKind, FiatCurrency, MarketQuote};
use crate::provider::MarketFeedProvider;

const PROVIDER_ID: &str = "STOCK_SIM";

/// Stock-proxy data generator over the fixed stock universe.
#[derive(Default)]
pub struct SyntheticStockProvider;

impl SyntheticStockProvider {
    pub fn new() -> Self {
        Self
    }
}

fn dec(value: f64, scale: u32) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(scale)
}

#[async_trait]
impl MarketFeedProvider for SyntheticStockProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn kind(&self) -> AssetKind {
        AssetKind::Stock
    }

    async fn fetch_markets(
        &self,
        _currency: FiatCurrency,
    ) -> Result<Vec<MarketQuote>, MarketDataError> {
        let mut rng = rand::thread_rng();

        let quotes = INDIAN_STOCKS
            .iter()
            .enumerate()
            .map(|(index, stock)| MarketQuote {
                id: stock.symbol.to_lowercase(),
                symbol: stock.bse_code.to_string(),
                name: stock.name.to_string(),
                current_price: dec(rng.gen::<f64>() * 1000.0, 2),
                price_change_percentage_24h: dec((rng.gen::<f64>() - 0.5) * 5.0, 2),
                market_cap: dec(rng.gen::<f64>() * 10_000_000.0, 0),
                circulating_supply: dec(rng.gen::<f64>() * 1_000_000.0, 0),
                total_volume: dec(rng.gen::<f64>() * 100_000.0, 0),
                market_cap_rank: (index + 1) as u32,
            })
            .collect();

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_serves_full_universe_with_ranks() {
        let provider = SyntheticStockProvider::new();
        let quotes = provider.fetch_markets(FiatCurrency::Inr).await.unwrap();

        assert_eq!(quotes.len(), INDIAN_STOCKS.len());
        assert_eq!(quotes[0].id, "reliance");
        assert_eq!(quotes[0].symbol, "500325");
        assert_eq!(quotes[0].market_cap_rank, 1);
        assert_eq!(quotes.last().unwrap().market_cap_rank, quotes.len() as u32);

        for quote in &quotes {
            assert!(quote.current_price >= dec!(0));
            assert!(quote.current_price <= dec!(1000));
            assert!(quote.price_change_percentage_24h.abs() <= dec!(2.5));
        }
    }
}
