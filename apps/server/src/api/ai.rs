//! AI commentary routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use marketdeck_market_data::AssetKind;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRequest {
    symbol: String,
    #[serde(rename = "type")]
    kind: AssetKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResponse {
    analysis: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    answer: String,
}

async fn asset_analysis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalysisRequest>,
) -> ApiResult<Json<AnalysisResponse>> {
    let analysis = state
        .inference_client
        .asset_analysis(&body.symbol, body.kind)
        .await?;
    Ok(Json(AnalysisResponse { analysis }))
}

async fn free_form_query(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryRequest>,
) -> ApiResult<Json<QueryResponse>> {
    let answer = state
        .inference_client
        .query("user_analysis", &body.query)
        .await?;
    Ok(Json(QueryResponse { answer }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ai/analysis", post(asset_analysis))
        .route("/ai/query", post(free_form_query))
}
