//! Ledger routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::main_lib::AppState;
use marketdeck_core::portfolios::{
    Holding, HoldingUpdate, NewHolding, NewTransaction, Portfolio, PortfolioSummary,
    PortfolioUpdate, Transaction, TransactionUpdate,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePortfolioRequest {
    name: String,
    currency: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetActiveRequest {
    id: Option<String>,
}

async fn list_portfolios(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Portfolio>>> {
    Ok(Json(state.portfolio_service.list_portfolios()?))
}

async fn create_portfolio(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePortfolioRequest>,
) -> ApiResult<(StatusCode, Json<Portfolio>)> {
    let portfolio =
        state
            .portfolio_service
            .create_portfolio(&body.name, &body.currency, body.description)?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

async fn active_portfolio(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Option<Portfolio>>> {
    Ok(Json(state.portfolio_service.active_portfolio()?))
}

async fn set_active_portfolio(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetActiveRequest>,
) -> ApiResult<StatusCode> {
    state
        .portfolio_service
        .set_active_portfolio(body.id.as_deref())?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Portfolio>> {
    Ok(Json(state.portfolio_service.get_portfolio(&id)?))
}

async fn update_portfolio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<PortfolioUpdate>,
) -> ApiResult<Json<Portfolio>> {
    Ok(Json(state.portfolio_service.update_portfolio(&id, body)?))
}

async fn delete_portfolio(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.portfolio_service.delete_portfolio(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn portfolio_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PortfolioSummary>> {
    Ok(Json(state.portfolio_service.summary(&id)?))
}

async fn add_holding(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<NewHolding>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let holding = state.portfolio_service.add_holding(&id, body)?;
    Ok((StatusCode::CREATED, Json(holding)))
}

async fn update_holding(
    State(state): State<Arc<AppState>>,
    Path((id, holding_id)): Path<(String, String)>,
    Json(body): Json<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    Ok(Json(
        state
            .portfolio_service
            .update_holding(&id, &holding_id, body)?,
    ))
}

async fn remove_holding(
    State(state): State<Arc<AppState>>,
    Path((id, holding_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.portfolio_service.remove_holding(&id, &holding_id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_transaction(
    State(state): State<Arc<AppState>>,
    Path((id, holding_id)): Path<(String, String)>,
    Json(body): Json<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = state
        .portfolio_service
        .add_transaction(&id, &holding_id, body)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path((id, holding_id, transaction_id)): Path<(String, String, String)>,
    Json(body): Json<TransactionUpdate>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.portfolio_service.update_transaction(
        &id,
        &holding_id,
        &transaction_id,
        body,
    )?))
}

async fn remove_transaction(
    State(state): State<Arc<AppState>>,
    Path((id, holding_id, transaction_id)): Path<(String, String, String)>,
) -> ApiResult<StatusCode> {
    state
        .portfolio_service
        .remove_transaction(&id, &holding_id, &transaction_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios", get(list_portfolios).post(create_portfolio))
        .route(
            "/portfolios/active",
            get(active_portfolio).put(set_active_portfolio),
        )
        .route(
            "/portfolios/{id}",
            get(get_portfolio)
                .put(update_portfolio)
                .delete(delete_portfolio),
        )
        .route("/portfolios/{id}/summary", get(portfolio_summary))
        .route("/portfolios/{id}/holdings", post(add_holding))
        .route(
            "/portfolios/{id}/holdings/{holding_id}",
            put(update_holding).delete(remove_holding),
        )
        .route(
            "/portfolios/{id}/holdings/{holding_id}/transactions",
            post(add_transaction),
        )
        .route(
            "/portfolios/{id}/holdings/{holding_id}/transactions/{transaction_id}",
            put(update_transaction).delete(remove_transaction),
        )
}
