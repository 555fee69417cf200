//! Market news aggregation.
//!
//! Pulls the popular crypto news feed from CryptoCompare, mixes in
//! generated stock items, and serves the newest six. A failed fetch yields
//! an empty list; nothing is retried.

use chrono::{Duration, TimeZone, Utc};
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::{CRYPTOCOMPARE_NEWS_URL, NEWS_LIMIT};
use crate::errors::MarketDataError;
use crate::models::NewsItem;

const PROVIDER_ID: &str = "CRYPTOCOMPARE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Number of generated stock items mixed into the crypto feed.
const STOCK_NEWS_COUNT: usize = 2;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(rename = "Data")]
    data: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    id: String,
    title: String,
    body: String,
    url: String,
    source: String,
    /// Unix timestamp in seconds
    published_on: i64,
    /// Pipe-separated category list
    categories: String,
    imageurl: Option<String>,
}

/// Client for the aggregated market news feed.
pub struct NewsClient {
    client: Client,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// The merged news feed, newest first, capped at six items.
    ///
    /// Failures degrade to an empty list; callers render nothing rather
    /// than an error.
    pub async fn fetch_market_news(&self) -> Vec<NewsItem> {
        let crypto_news = match self.fetch_crypto_news().await {
            Ok(items) => items,
            Err(e) => {
                error!("Failed to fetch news: {}", e);
                return Vec::new();
            }
        };

        let mut items = crypto_news;
        items.extend(generated_stock_news(STOCK_NEWS_COUNT));
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        items.truncate(NEWS_LIMIT);
        items
    }

    async fn fetch_crypto_news(&self) -> Result<Vec<NewsItem>, MarketDataError> {
        let response = self.client.get(CRYPTOCOMPARE_NEWS_URL).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP error: {}", response.status()),
            });
        }

        let payload: NewsResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::InvalidResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        let items = payload
            .data
            .into_iter()
            .filter_map(|article| {
                let published_at = Utc.timestamp_opt(article.published_on, 0).single()?;
                let mut categories = vec!["Cryptocurrency".to_string()];
                categories.extend(article.categories.split('|').map(str::to_string));
                Some(NewsItem {
                    id: format!("crypto-{}", article.id),
                    title: article.title,
                    description: article.body,
                    url: article.url,
                    source: article.source,
                    published_at,
                    categories,
                    thumbnail: article.imageurl,
                })
            })
            .collect();

        Ok(items)
    }
}

/// Generated stock-news placeholders, staggered one hour apart.
pub fn generated_stock_news(count: usize) -> Vec<NewsItem> {
    const COMPANIES: &[(&str, &str)] = &[
        ("AAPL", "Apple"),
        ("MSFT", "Microsoft"),
        ("GOOGL", "Google"),
        ("AMZN", "Amazon"),
    ];

    let now = Utc::now();
    COMPANIES
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, (symbol, name))| NewsItem {
            id: format!("stock-{}-{}", symbol, now.timestamp()),
            title: format!("{} Stock Update: Market Analysis and Future Prospects", name),
            description: format!(
                "Latest market analysis shows promising trends for {}. Analysts predict strong \
                 performance in the coming quarter based on recent developments and market \
                 indicators.",
                name
            ),
            url: "https://example.com/stock-news".to_string(),
            source: "Market Watch".to_string(),
            published_at: now - Duration::hours(index as i64),
            categories: vec![
                "Stocks".to_string(),
                symbol.to_string(),
                "Market Analysis".to_string(),
            ],
            thumbnail: Some(format!("https://logo.clearbit.com/{}.com", name.to_lowercase())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_stock_news_staggers_timestamps() {
        let items = generated_stock_news(3);
        assert_eq!(items.len(), 3);
        assert!(items[0].published_at > items[1].published_at);
        assert!(items[1].published_at > items[2].published_at);
        assert!(items[0].categories.contains(&"Stocks".to_string()));
        assert!(items[0].id.starts_with("stock-AAPL-"));
    }

    #[test]
    fn test_news_response_parses_cryptocompare_shape() {
        let json = r#"{
            "Data": [{
                "id": "101",
                "title": "Bitcoin climbs",
                "body": "Bitcoin rose today.",
                "url": "https://example.com/a",
                "source": "CoinDesk",
                "published_on": 1735689600,
                "categories": "BTC|Market",
                "imageurl": "https://example.com/a.png"
            }]
        }"#;

        let parsed: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].categories, "BTC|Market");
    }
}
