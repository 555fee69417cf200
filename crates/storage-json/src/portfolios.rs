//! Ledger document persistence.

use crate::document_store::JsonDocumentStore;
use marketdeck_core::constants::PORTFOLIO_STORE_KEY;
use marketdeck_core::errors::Result;
use marketdeck_core::portfolios::{PortfolioState, PortfolioStoreTrait};

/// Persists the ledger state document under the `portfolio-store` key.
pub struct PortfolioStore {
    documents: JsonDocumentStore,
}

impl PortfolioStore {
    pub fn new(documents: JsonDocumentStore) -> Self {
        Self { documents }
    }
}

impl PortfolioStoreTrait for PortfolioStore {
    fn load(&self) -> Result<PortfolioState> {
        self.documents.read(PORTFOLIO_STORE_KEY)
    }

    fn save(&self, state: &PortfolioState) -> Result<()> {
        self.documents.write(PORTFOLIO_STORE_KEY, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use marketdeck_core::portfolios::{Portfolio, PortfolioPerformance};
    use rust_decimal_macros::dec;

    #[test]
    fn test_state_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PortfolioStore::new(JsonDocumentStore::new(dir.path()).unwrap());

        // Fresh store serves the empty document.
        let initial = store.load().unwrap();
        assert!(initial.portfolios.is_empty());
        assert!(initial.active_portfolio_id.is_none());

        let now = Utc::now();
        let state = PortfolioState {
            portfolios: vec![Portfolio {
                id: "p1".to_string(),
                name: "Growth".to_string(),
                description: None,
                total_value: dec!(1000),
                currency: "INR".to_string(),
                created_at: now,
                last_updated: now,
                holdings: Vec::new(),
                performance: PortfolioPerformance::default(),
            }],
            active_portfolio_id: Some("p1".to_string()),
        };
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.portfolios.len(), 1);
        assert_eq!(loaded.portfolios[0].name, "Growth");
        assert_eq!(loaded.portfolios[0].total_value, dec!(1000));
        assert_eq!(loaded.active_portfolio_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_document_keeps_storage_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = PortfolioStore::new(JsonDocumentStore::new(dir.path()).unwrap());
        store.save(&PortfolioState::default()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("portfolio-store.json")).unwrap();
        assert!(raw.contains("\"portfolios\""));
        assert!(raw.contains("\"activePortfolioId\""));
    }
}
