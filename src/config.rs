//! Configuration module

use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,

    /// Directory holding `model.onnx` + `manifest.json`
    pub model_dir: PathBuf,

    /// Max scan records kept in memory
    pub history_capacity: usize,

    /// "development" or "production"
    pub environment: String,
}

impl Config {
    /// Read configuration from environment variables, with defaults for
    /// every field so a bare `cargo run` works
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_dir: env::var("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models")),

            history_capacity: env::var("HISTORY_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(crate::logic::history::DEFAULT_CAPACITY),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
