/// Runtime configuration, environment-driven with workable defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Source file used when an import request names no file of its own.
    pub import_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Config {
            listen_addr: std::env::var("POSITIONS_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: std::env::var("POSITIONS_DB_PATH")
                .unwrap_or_else(|_| "data/positions.db".to_string()),
            import_file: std::env::var("POSITIONS_IMPORT_FILE")
                .unwrap_or_else(|_| "data/positions.csv".to_string()),
        }
    }
}
