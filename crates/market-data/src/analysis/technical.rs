//! Technical summary from 14-day OHLC candles.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculations::{rsi, rsi_interpretation};
use crate::errors::MarketDataError;
use crate::provider::CoinGeckoProvider;

const CANDLE_DAYS: u32 = 14;

/// Direction of the recent price action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Bullish => f.write_str("Bullish"),
            Trend::Bearish => f.write_str("Bearish"),
        }
    }
}

/// Technical indicators for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSummary {
    pub trend: Trend,
    /// Lowest close in the window
    pub support: Decimal,
    /// Highest close in the window
    pub resistance: Decimal,
    pub rsi: Decimal,
    pub rsi_signal: String,
    pub macd_signal: String,
}

/// Build the technical summary for one asset from its recent candles.
pub async fn technical_summary(
    provider: &CoinGeckoProvider,
    asset_id: &str,
) -> Result<TechnicalSummary, MarketDataError> {
    let bars = provider.ohlc(asset_id, CANDLE_DAYS).await?;
    let closes: Vec<Decimal> = bars.iter().map(|bar| bar.close).collect();

    let (first, rest) = closes.split_first().ok_or_else(|| {
        MarketDataError::InvalidResponse {
            provider: "COINGECKO".to_string(),
            message: format!("no candles for {}", asset_id),
        }
    })?;

    let mut support = *first;
    let mut resistance = *first;
    for close in rest {
        support = support.min(*close);
        resistance = resistance.max(*close);
    }

    let average = closes.iter().sum::<Decimal>() / Decimal::from(closes.len());
    let last = *closes.last().unwrap_or(first);
    let trend = if last > average {
        Trend::Bullish
    } else {
        Trend::Bearish
    };

    let rsi_value = rsi(&closes).round_dp(0);
    let macd_signal = match trend {
        Trend::Bullish => "Bullish Crossover",
        Trend::Bearish => "Bearish Crossover",
    };

    Ok(TechnicalSummary {
        trend,
        support,
        resistance,
        rsi: rsi_value,
        rsi_signal: rsi_interpretation(rsi_value).to_string(),
        macd_signal: macd_signal.to_string(),
    })
}
