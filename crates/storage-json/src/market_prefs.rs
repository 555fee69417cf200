//! Preferences document persistence.

use crate::document_store::JsonDocumentStore;
use marketdeck_core::constants::MARKET_PREFS_STORE_KEY;
use marketdeck_core::errors::Result;
use marketdeck_core::market_prefs::{MarketPrefs, MarketPrefsStoreTrait};

/// Persists the preferences document under the `market-store` key.
pub struct MarketPrefsStore {
    documents: JsonDocumentStore,
}

impl MarketPrefsStore {
    pub fn new(documents: JsonDocumentStore) -> Self {
        Self { documents }
    }
}

impl MarketPrefsStoreTrait for MarketPrefsStore {
    fn load(&self) -> Result<MarketPrefs> {
        self.documents.read(MARKET_PREFS_STORE_KEY)
    }

    fn save(&self, prefs: &MarketPrefs) -> Result<()> {
        self.documents.write(MARKET_PREFS_STORE_KEY, prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = MarketPrefsStore::new(JsonDocumentStore::new(dir.path()).unwrap());

        let mut prefs = store.load().unwrap();
        assert!(prefs.favorites.is_empty());

        prefs.favorites.push("bitcoin".to_string());
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.favorites, vec!["bitcoin"]);

        let raw = std::fs::read_to_string(dir.path().join("market-store.json")).unwrap();
        assert!(raw.contains("\"activeTab\""));
    }
}
