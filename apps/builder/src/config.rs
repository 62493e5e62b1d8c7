use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables by the
/// hosting application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the résumé store API, e.g. `https://app.example.com/api`.
    pub api_base_url: String,
    /// Timeout applied to every store call.
    pub request_timeout_secs: u64,
    /// Directory the exported PDF is saved into.
    pub export_output_dir: std::path::PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("RESUME_API_BASE_URL")?,
            request_timeout_secs: std::env::var("RESUME_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("RESUME_API_TIMEOUT_SECS must be a number of seconds")?,
            export_output_dir: std::env::var("EXPORT_OUTPUT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
