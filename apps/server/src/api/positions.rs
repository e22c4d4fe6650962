use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;

use positions_core::constants::DEFAULT_PAGE_SIZE;
use positions_core::positions::{
    NewPosition, Position, PositionFilters, PositionPage, PositionPatch, Sort,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ListQuery {
    page: Option<i64>,
    page_size: Option<i64>,
    sort_by: Option<String>,
    sort_desc: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopQuery {
    limit: Option<i64>,
}

async fn list_positions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<PositionPage>> {
    let sort = query.sort_by.map(|field| Sort {
        id: field,
        desc: query.sort_desc.unwrap_or(false),
    });
    let page = state
        .position_service
        .list_positions(
            query.page.unwrap_or(1),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        )
        .await?;
    Ok(Json(page))
}

async fn get_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Position>> {
    Ok(Json(state.position_service.get_position(id).await?))
}

async fn create_position(
    State(state): State<Arc<AppState>>,
    Json(new_position): Json<NewPosition>,
) -> ApiResult<(StatusCode, Json<Position>)> {
    let created = state.position_service.create_position(new_position).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<NewPosition>,
) -> ApiResult<Json<Position>> {
    Ok(Json(state.position_service.update_position(id, update).await?))
}

async fn patch_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<PositionPatch>,
) -> ApiResult<Json<Position>> {
    Ok(Json(state.position_service.patch_position(id, patch).await?))
}

async fn delete_position(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.position_service.delete_position(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_positions_batch(
    State(state): State<Arc<AppState>>,
    Json(ids): Json<Vec<i64>>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = state.position_service.delete_positions(ids).await?;
    Ok(Json(serde_json::json!({ "deletedCount": deleted })))
}

async fn clear_all_positions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    let deleted = state.position_service.delete_all_positions().await?;
    Ok(Json(serde_json::json!({ "deletedCount": deleted })))
}

async fn search_positions(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<PositionFilters>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(state.position_service.search_positions(filters).await?))
}

async fn count_positions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<serde_json::Value>> {
    let count = state.position_service.count_positions().await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

async fn positions_by_partner(
    Path(partner_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state.position_service.get_positions_by_partner(&partner_id).await?,
    ))
}

async fn positions_by_account(
    Path(account_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state.position_service.get_positions_by_account(&account_id).await?,
    ))
}

async fn positions_by_currency(
    Path(currency): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state.position_service.get_positions_by_currency(&currency).await?,
    ))
}

async fn positions_by_asset_class(
    Path(asset_class): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state
            .position_service
            .get_positions_by_asset_class(&asset_class)
            .await?,
    ))
}

async fn positions_above_value(
    Path(amount): Path<f64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state.position_service.get_positions_above_value(amount).await?,
    ))
}

async fn top_positions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopQuery>,
) -> ApiResult<Json<Vec<Position>>> {
    Ok(Json(
        state
            .position_service
            .get_top_positions_by_value(query.limit.unwrap_or(10))
            .await?,
    ))
}

async fn distinct_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_account_ids().await?))
}

async fn distinct_partners(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_partner_ids().await?))
}

async fn distinct_asset_classes(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_asset_classes().await?))
}

async fn distinct_currencies(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_currencies().await?))
}

async fn distinct_mandate_types(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.position_service.get_distinct_mandate_types().await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/positions", get(list_positions).post(create_position))
        .route("/positions/batch", delete(delete_positions_batch))
        .route("/positions/clear-all", delete(clear_all_positions))
        .route("/positions/search", get(search_positions))
        .route("/positions/count", get(count_positions))
        .route("/positions/top-positions", get(top_positions))
        .route(
            "/positions/value-greater-than/{amount}",
            get(positions_above_value),
        )
        .route("/positions/partner/{partner_id}", get(positions_by_partner))
        .route("/positions/account/{account_id}", get(positions_by_account))
        .route("/positions/currency/{currency}", get(positions_by_currency))
        .route(
            "/positions/asset-class/{asset_class}",
            get(positions_by_asset_class),
        )
        .route("/positions/distinct/accounts", get(distinct_accounts))
        .route("/positions/distinct/partners", get(distinct_partners))
        .route("/positions/distinct/asset-classes", get(distinct_asset_classes))
        .route("/positions/distinct/currencies", get(distinct_currencies))
        .route("/positions/distinct/mandate-types", get(distinct_mandate_types))
        .route(
            "/positions/{id}",
            get(get_position)
                .put(update_position)
                .patch(patch_position)
                .delete(delete_position),
        )
}
