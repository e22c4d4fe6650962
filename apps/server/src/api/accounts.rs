use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use positions_core::analytics::{AccountDetails, AccountSummary, RiskMetrics};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_account_ids().await?))
}

async fn account_summaries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AccountSummary>>> {
    Ok(Json(state.analytics_service.get_account_summaries().await?))
}

async fn account_details(
    Path(account_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AccountDetails>> {
    Ok(Json(
        state.analytics_service.get_account_details(&account_id).await?,
    ))
}

async fn account_risk(
    Path(account_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RiskMetrics>> {
    Ok(Json(
        state.analytics_service.get_risk_metrics(&account_id).await?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/summaries", get(account_summaries))
        .route("/accounts/{account_id}/details", get(account_details))
        .route("/accounts/{account_id}/risk", get(account_risk))
}
