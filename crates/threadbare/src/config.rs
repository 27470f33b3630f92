use std::{env, path::PathBuf, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "inventory.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Directory uploaded item images are served from (default: "uploads")
    pub upload_dir: PathBuf,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Insert the sample items into an empty store at startup (default: true)
    pub seed_sample_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "inventory.db")
    /// - `UPLOAD_DIR` - Upload directory (default: "uploads")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `SEED_SAMPLE_DATA` - Set to `0` or `false` to skip seeding (default: true)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "inventory.db".to_string()),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}
