use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::main_lib::AppState;
use marketdeck_market_data::NewsItem;

/// The aggregated feed degrades to an empty list on upstream failure.
async fn news(State(state): State<Arc<AppState>>) -> Json<Vec<NewsItem>> {
    Json(state.market_service.news().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/news", get(news))
}
