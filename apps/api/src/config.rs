use anyhow::{Context, Result};

pub const DEFAULT_JOBS_API_URL: &str = "https://remotive.com/api/remote-jobs";

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, preferences live in an in-process map and vanish on restart.
    pub redis_url: Option<String>,
    pub jobs_api_url: String,
    pub jobs_fetch_limit: u32,
    pub jobs_fetch_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: std::env::var("REDIS_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            jobs_api_url: std::env::var("JOBS_API_URL")
                .unwrap_or_else(|_| DEFAULT_JOBS_API_URL.to_string()),
            jobs_fetch_limit: parse_env("JOBS_FETCH_LIMIT", 100)?,
            jobs_fetch_timeout_secs: parse_env("JOBS_FETCH_TIMEOUT_SECS", 30)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: None,
            jobs_api_url: DEFAULT_JOBS_API_URL.to_string(),
            jobs_fetch_limit: 100,
            jobs_fetch_timeout_secs: 30,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
