//! Preference domain models.

use marketdeck_market_data::FiatCurrency;
use serde::{Deserialize, Serialize};

/// Which market listing the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketTab {
    #[default]
    Crypto,
    Stocks,
}

/// The persisted preferences document: `{ favorites, currency, activeTab }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrefs {
    /// Favorited asset ids, in insertion order
    pub favorites: Vec<String>,
    pub currency: FiatCurrency,
    pub active_tab: MarketTab,
}
