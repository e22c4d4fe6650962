use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use positions_core::analytics::{AnalyticsService, AnalyticsServiceTrait};
use positions_core::db;
use positions_core::import::{ImportService, ImportServiceTrait};
use positions_core::positions::{PositionService, PositionServiceTrait};

use crate::config::Config;

pub struct AppState {
    pub position_service: Arc<dyn PositionServiceTrait + Send + Sync>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait + Send + Sync>,
    pub import_service: Arc<dyn ImportServiceTrait + Send + Sync>,
    /// Source file used when an import request names none.
    pub default_import_file: PathBuf,
}

pub fn init_tracing() {
    let log_format = std::env::var("POSITIONS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    Ok(Arc::new(AppState {
        position_service: Arc::new(PositionService::new(pool.clone())),
        analytics_service: Arc::new(AnalyticsService::new(pool.clone())),
        import_service: Arc::new(ImportService::new(pool)),
        default_import_file: PathBuf::from(&config.import_file),
    }))
}
