//! Watchlist and display preference routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::main_lib::AppState;
use marketdeck_core::market_prefs::{MarketPrefs, MarketTab};
use marketdeck_market_data::FiatCurrency;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteRequest {
    asset_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyRequest {
    currency: FiatCurrency,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TabRequest {
    active_tab: MarketTab,
}

async fn get_prefs(State(state): State<Arc<AppState>>) -> Json<MarketPrefs> {
    Json(state.prefs_service.prefs())
}

async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FavoriteRequest>,
) -> ApiResult<StatusCode> {
    state.prefs_service.add_favorite(&body.asset_id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.prefs_service.remove_favorite(&asset_id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_currency(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CurrencyRequest>,
) -> ApiResult<StatusCode> {
    state.prefs_service.set_currency(body.currency)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_active_tab(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TabRequest>,
) -> ApiResult<StatusCode> {
    state.prefs_service.set_active_tab(body.active_tab)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prefs", get(get_prefs))
        .route("/prefs/favorites", post(add_favorite))
        .route("/prefs/favorites/{asset_id}", delete(remove_favorite))
        .route("/prefs/currency", put(set_currency))
        .route("/prefs/tab", put(set_active_tab))
}
