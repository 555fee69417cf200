//! Fixed-interval market refresh.
//!
//! Mirrors the dashboard's poll cadence: crypto every 20 seconds, stocks
//! every 30. A failed poll needs no handling here - the service caches
//! placeholder rows and the next tick supersedes them.

use std::sync::Arc;

use crate::main_lib::AppState;
use marketdeck_market_data::constants::{CRYPTO_REFRESH_INTERVAL, STOCK_REFRESH_INTERVAL};
use marketdeck_market_data::AssetKind;

pub fn start_market_refresh(state: Arc<AppState>) {
    let crypto_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(CRYPTO_REFRESH_INTERVAL);
        loop {
            ticker.tick().await;
            let currency = crypto_state.prefs_service.prefs().currency;
            crypto_state
                .market_service
                .refresh(AssetKind::Crypto, currency)
                .await;
        }
    });

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(STOCK_REFRESH_INTERVAL);
        loop {
            ticker.tick().await;
            let currency = state.prefs_service.prefs().currency;
            state
                .market_service
                .refresh(AssetKind::Stock, currency)
                .await;
        }
    });
}
