//! HTTP API surface.

mod ai;
mod health;
mod market;
mod news;
mod portfolios;
mod prefs;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(portfolios::router())
        .merge(market::router())
        .merge(news::router())
        .merge(ai::router())
        .merge(prefs::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
