//! JSON document storage for marketdeck.
//!
//! This crate is the only place in the application that touches the
//! filesystem. It implements the store traits defined in
//! `marketdeck-core` by serializing whole state documents to JSON files
//! under fixed storage keys - the same documents, under the same keys,
//! the dashboard keeps in browser local storage. There is no versioning
//! or migration logic for this format.
//!
//! # Architecture
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//! <data_dir>/<key>.json
//! ```

mod document_store;
mod market_prefs;
mod portfolios;

pub use document_store::JsonDocumentStore;
pub use market_prefs::MarketPrefsStore;
pub use portfolios::PortfolioStore;

// Re-export from marketdeck-core for convenience
pub use marketdeck_core::errors::{Error, Result, StorageError};
