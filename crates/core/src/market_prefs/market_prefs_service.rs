//! Preference service.

use std::sync::{Arc, RwLock};

use super::market_prefs_model::{MarketPrefs, MarketTab};
use super::market_prefs_traits::{MarketPrefsServiceTrait, MarketPrefsStoreTrait};
use crate::errors::Result;
use marketdeck_market_data::FiatCurrency;

/// Service for the watchlist and display preferences.
///
/// Same persistence discipline as the ledger: mutate a copy, persist,
/// then commit.
pub struct MarketPrefsService {
    prefs: RwLock<MarketPrefs>,
    store: Arc<dyn MarketPrefsStoreTrait>,
}

impl MarketPrefsService {
    pub fn new(store: Arc<dyn MarketPrefsStoreTrait>) -> Result<Self> {
        let prefs = store.load()?;
        Ok(Self {
            prefs: RwLock::new(prefs),
            store,
        })
    }

    fn mutate(&self, op: impl FnOnce(&mut MarketPrefs)) -> Result<()> {
        let mut guard = self.prefs.write().unwrap();
        let mut working = guard.clone();
        op(&mut working);
        self.store.save(&working)?;
        *guard = working;
        Ok(())
    }
}

impl MarketPrefsServiceTrait for MarketPrefsService {
    fn prefs(&self) -> MarketPrefs {
        self.prefs.read().unwrap().clone()
    }

    fn add_favorite(&self, asset_id: &str) -> Result<()> {
        self.mutate(|prefs| {
            if !prefs.favorites.iter().any(|id| id == asset_id) {
                prefs.favorites.push(asset_id.to_string());
            }
        })
    }

    fn remove_favorite(&self, asset_id: &str) -> Result<()> {
        self.mutate(|prefs| prefs.favorites.retain(|id| id != asset_id))
    }

    fn set_currency(&self, currency: FiatCurrency) -> Result<()> {
        self.mutate(|prefs| prefs.currency = currency)
    }

    fn set_active_tab(&self, tab: MarketTab) -> Result<()> {
        self.mutate(|prefs| prefs.active_tab = tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        saves: Mutex<usize>,
    }

    impl MarketPrefsStoreTrait for MemoryStore {
        fn load(&self) -> Result<MarketPrefs> {
            Ok(MarketPrefs::default())
        }

        fn save(&self, _prefs: &MarketPrefs) -> Result<()> {
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn service() -> (MarketPrefsService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (MarketPrefsService::new(store.clone()).unwrap(), store)
    }

    #[test]
    fn test_favorites_preserve_order_without_duplicates() {
        let (service, _) = service();
        service.add_favorite("bitcoin").unwrap();
        service.add_favorite("ethereum").unwrap();
        service.add_favorite("bitcoin").unwrap();

        assert_eq!(service.prefs().favorites, vec!["bitcoin", "ethereum"]);

        service.remove_favorite("bitcoin").unwrap();
        assert_eq!(service.prefs().favorites, vec!["ethereum"]);
    }

    #[test]
    fn test_currency_and_tab_updates() {
        let (service, _) = service();
        assert_eq!(service.prefs().currency, FiatCurrency::Inr);

        service.set_currency(FiatCurrency::Usd).unwrap();
        service.set_active_tab(MarketTab::Stocks).unwrap();

        let prefs = service.prefs();
        assert_eq!(prefs.currency, FiatCurrency::Usd);
        assert_eq!(prefs.active_tab, MarketTab::Stocks);
    }

    #[test]
    fn test_mutations_persist() {
        let (service, store) = service();
        service.add_favorite("bitcoin").unwrap();
        service.set_currency(FiatCurrency::Usd).unwrap();
        assert_eq!(*store.saves.lock().unwrap(), 2);
    }
}
