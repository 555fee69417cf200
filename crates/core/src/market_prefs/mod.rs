//! Watchlist and market display preferences.

mod market_prefs_model;
mod market_prefs_service;
mod market_prefs_traits;

pub use market_prefs_model::{MarketPrefs, MarketTab};
pub use market_prefs_service::MarketPrefsService;
pub use market_prefs_traits::{MarketPrefsServiceTrait, MarketPrefsStoreTrait};
