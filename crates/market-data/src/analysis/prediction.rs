//! Volatility-scaled price projections.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calculations::volatility;
use crate::errors::MarketDataError;
use crate::provider::CoinGeckoProvider;

const CHART_DAYS: u32 = 30;

/// Risk band derived from the volatility reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

/// Price projections for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePrediction {
    pub day: Decimal,
    pub week: Decimal,
    pub month: Decimal,
    /// Percent, lower for more volatile assets
    pub confidence: Decimal,
    pub risk: RiskBand,
}

/// Project prices from the last 30 days of history.
///
/// The projection simply scales the current price by the observed
/// volatility; it is illustrative, not a forecast model.
pub async fn price_prediction(
    provider: &CoinGeckoProvider,
    asset_id: &str,
) -> Result<PricePrediction, MarketDataError> {
    let series = provider.market_chart(asset_id, CHART_DAYS).await?;
    let closes = series.closes();

    let current = series
        .latest()
        .ok_or_else(|| MarketDataError::InvalidResponse {
            provider: "COINGECKO".to_string(),
            message: format!("no price history for {}", asset_id),
        })?;

    let vol = volatility(&closes);
    let risk = if vol > dec!(5) {
        RiskBand::High
    } else if vol > dec!(3) {
        RiskBand::Medium
    } else {
        RiskBand::Low
    };

    Ok(PricePrediction {
        day: (current * (Decimal::ONE + vol * dec!(0.01))).round_dp(2),
        week: (current * (Decimal::ONE + vol * dec!(0.03))).round_dp(2),
        month: (current * (Decimal::ONE + vol * dec!(0.05))).round_dp(2),
        confidence: (dec!(85) - vol * dec!(10)).round_dp(0),
        risk,
    })
}
