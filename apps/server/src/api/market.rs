//! Market listing, history, and analysis routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use marketdeck_core::market_prefs::MarketTab;
use marketdeck_market_data::analysis::{PricePrediction, SentimentSummary, TechnicalSummary};
use marketdeck_market_data::{AssetKind, FiatCurrency, HistoricalSeries, MarketQuote};

const DEFAULT_HISTORY_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
struct MarketsQuery {
    kind: Option<AssetKind>,
    currency: Option<FiatCurrency>,
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    days: Option<u32>,
}

/// Listing defaults follow the stored preferences: the active tab picks
/// the kind, the display currency picks the pricing.
async fn markets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MarketsQuery>,
) -> ApiResult<Json<Vec<MarketQuote>>> {
    let prefs = state.prefs_service.prefs();
    let kind = query.kind.unwrap_or(match prefs.active_tab {
        MarketTab::Crypto => AssetKind::Crypto,
        MarketTab::Stocks => AssetKind::Stock,
    });
    let currency = query.currency.unwrap_or(prefs.currency);

    Ok(Json(state.market_service.markets(kind, currency).await))
}

async fn history(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<HistoricalSeries>> {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    state
        .market_service
        .history(&asset_id, days)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::upstream(format!("no price history for {}", asset_id)))
}

async fn technical(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<TechnicalSummary>> {
    state
        .market_service
        .technical(&asset_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::upstream(format!("no technical analysis for {}", asset_id)))
}

async fn sentiment(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<SentimentSummary>> {
    state
        .market_service
        .sentiment(&asset_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::upstream(format!("no sentiment data for {}", asset_id)))
}

async fn prediction(
    State(state): State<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<PricePrediction>> {
    state
        .market_service
        .prediction(&asset_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::upstream(format!("no prediction for {}", asset_id)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/markets", get(markets))
        .route("/markets/{asset_id}/history", get(history))
        .route("/markets/{asset_id}/analysis/technical", get(technical))
        .route("/markets/{asset_id}/analysis/sentiment", get(sentiment))
        .route("/markets/{asset_id}/analysis/prediction", get(prediction))
}
