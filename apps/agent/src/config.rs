use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Everything has a sensible default — the agent runs out of the box
/// against a local `data/` directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding candidates.json, jobs.json, shortlists.json.
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: std::env::var("SCOUT_DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
