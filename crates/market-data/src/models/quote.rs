use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single market listing row.
///
/// Field names stay snake_case to mirror the upstream listing payloads
/// (CoinGecko's `/coins/markets` shape), which is also the shape consumers
/// of the listing endpoints expect.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Stable asset identifier, e.g. "bitcoin" or "reliance"
    pub id: String,
    /// Ticker shown to users, e.g. "BTC" or a BSE scrip code
    pub symbol: String,
    pub name: String,
    pub current_price: Decimal,
    pub price_change_percentage_24h: Decimal,
    pub market_cap: Decimal,
    pub circulating_supply: Decimal,
    pub total_volume: Decimal,
    pub market_cap_rank: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_roundtrip_keeps_snake_case() {
        let quote = MarketQuote {
            id: "bitcoin".to_string(),
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            current_price: dec!(64250.10),
            price_change_percentage_24h: dec!(-1.25),
            market_cap: dec!(1250000000),
            circulating_supply: dec!(19500000),
            total_volume: dec!(35000000),
            market_cap_rank: 1,
        };

        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"current_price\""));
        assert!(json.contains("\"price_change_percentage_24h\""));

        let back: MarketQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current_price, dec!(64250.10));
        assert_eq!(back.market_cap_rank, 1);
    }
}
