use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use positions_core::analytics::{DatabaseStats, PartnerSummary, PortfolioSummary};

use crate::{error::ApiResult, main_lib::AppState};

async fn portfolio_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    Ok(Json(state.analytics_service.get_portfolio_summary().await?))
}

async fn partner_summary(
    Path(partner_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PartnerSummary>> {
    Ok(Json(
        state.analytics_service.get_partner_summary(&partner_id).await?,
    ))
}

async fn database_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<DatabaseStats>> {
    Ok(Json(state.analytics_service.get_database_stats().await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(portfolio_summary))
        .route("/partners/{partner_id}/summary", get(partner_summary))
        .route("/stats", get(database_stats))
}
