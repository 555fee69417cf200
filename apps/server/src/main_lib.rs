use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use marketdeck_ai::InferenceClient;
use marketdeck_core::market_prefs::{MarketPrefsService, MarketPrefsServiceTrait};
use marketdeck_core::portfolios::{PortfolioService, PortfolioServiceTrait};
use marketdeck_market_data::MarketDataService;
use marketdeck_storage_json::{JsonDocumentStore, MarketPrefsStore, PortfolioStore};

/// Every service, constructed once at startup and injected by reference
/// into the route handlers.
pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub prefs_service: Arc<dyn MarketPrefsServiceTrait>,
    pub market_service: Arc<MarketDataService>,
    pub inference_client: Arc<InferenceClient>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let documents = JsonDocumentStore::new(&config.data_dir)?;
    tracing::info!("State documents stored under {}", config.data_dir);

    let portfolio_store = Arc::new(PortfolioStore::new(documents.clone()));
    let portfolio_service = Arc::new(PortfolioService::new(portfolio_store)?);

    let prefs_store = Arc::new(MarketPrefsStore::new(documents));
    let prefs_service = Arc::new(MarketPrefsService::new(prefs_store)?);

    let market_service = Arc::new(MarketDataService::new());

    if config.ai_endpoint.is_empty() {
        tracing::warn!("MD_AI_ENDPOINT is not set; AI analysis requests will fail");
    }
    let inference_client = Arc::new(InferenceClient::new(&config.ai_endpoint, &config.ai_token));

    Ok(Arc::new(AppState {
        portfolio_service,
        prefs_service,
        market_service,
        inference_client,
    }))
}
