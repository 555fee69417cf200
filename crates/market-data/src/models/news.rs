use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article from the aggregated feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
