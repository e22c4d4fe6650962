use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use positions_core::import::ImportSummary;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ImportRequest {
    /// Overrides the configured source file for this run.
    file_path: Option<String>,
    clear_existing: bool,
}

async fn import_positions(
    State(state): State<Arc<AppState>>,
    Query(request): Query<ImportRequest>,
) -> ApiResult<Json<ImportSummary>> {
    let source = request
        .file_path
        .map(PathBuf::from)
        .unwrap_or_else(|| state.default_import_file.clone());

    tracing::info!(
        "Import requested from {} (clear existing: {})",
        source.display(),
        request.clear_existing
    );
    let summary = state
        .import_service
        .import_positions(&source, request.clear_existing)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/positions/import", post(import_positions))
}
