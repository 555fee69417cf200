//! Preference store and service traits.

use super::market_prefs_model::{MarketPrefs, MarketTab};
use crate::errors::Result;
use marketdeck_market_data::FiatCurrency;

/// Persistence contract for the preferences document.
pub trait MarketPrefsStoreTrait: Send + Sync {
    /// Loads the persisted preferences, or the defaults when nothing has
    /// been persisted yet.
    fn load(&self) -> Result<MarketPrefs>;

    /// Persists the full preferences document.
    fn save(&self, prefs: &MarketPrefs) -> Result<()>;
}

/// Contract for preference operations. Mutations persist before
/// returning.
pub trait MarketPrefsServiceTrait: Send + Sync {
    fn prefs(&self) -> MarketPrefs;

    /// Adds an asset id to the favorites; already-present ids are left
    /// in place.
    fn add_favorite(&self, asset_id: &str) -> Result<()>;

    fn remove_favorite(&self, asset_id: &str) -> Result<()>;

    fn set_currency(&self, currency: FiatCurrency) -> Result<()>;

    fn set_active_tab(&self, tab: MarketTab) -> Result<()>;
}
