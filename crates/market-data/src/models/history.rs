use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A timestamped price observation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
}

/// A daily price series for one asset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub prices: Vec<PricePoint>,
}

impl HistoricalSeries {
    /// Just the price column, oldest first.
    pub fn closes(&self) -> Vec<Decimal> {
        self.prices.iter().map(|p| p.price).collect()
    }

    /// The most recent price, if any.
    pub fn latest(&self) -> Option<Decimal> {
        self.prices.last().map(|p| p.price)
    }
}

/// One OHLC candle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OhlcBar {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}
