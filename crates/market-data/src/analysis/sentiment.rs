//! Sentiment summary from community vote data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;
use crate::provider::CoinGeckoProvider;

/// Overall community mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLevel {
    Positive,
    Neutral,
    Negative,
}

/// Directional read of the sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketBias {
    Bullish,
    Neutral,
    Bearish,
}

/// Near-term outlook derived from the same vote split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outlook {
    Optimistic,
    Neutral,
    Cautious,
}

/// Sentiment indicators for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub overall: SentimentLevel,
    /// 0-10 scale derived from the vote percentage
    pub social_score: Decimal,
    pub bias: MarketBias,
    pub outlook: Outlook,
    /// The raw positive-vote percentage, reused as a fear/greed reading
    pub fear_greed_index: Decimal,
    pub fear_greed_label: String,
}

/// Build the sentiment summary for one asset from its community votes.
pub async fn sentiment_summary(
    provider: &CoinGeckoProvider,
    asset_id: &str,
) -> Result<SentimentSummary, MarketDataError> {
    let votes_up = provider.sentiment_votes_up(asset_id).await?;

    let (overall, bias, outlook, fear_greed_label) = if votes_up > dec!(60) {
        (
            SentimentLevel::Positive,
            MarketBias::Bullish,
            Outlook::Optimistic,
            "Greed",
        )
    } else if votes_up > dec!(40) {
        (
            SentimentLevel::Neutral,
            MarketBias::Neutral,
            Outlook::Neutral,
            "Neutral",
        )
    } else {
        (
            SentimentLevel::Negative,
            MarketBias::Bearish,
            Outlook::Cautious,
            "Fear",
        )
    };

    Ok(SentimentSummary {
        overall,
        social_score: (votes_up / dec!(100) * dec!(10)).round_dp(1),
        bias,
        outlook,
        fear_greed_index: votes_up.round_dp(0),
        fear_greed_label: fear_greed_label.to_string(),
    })
}
