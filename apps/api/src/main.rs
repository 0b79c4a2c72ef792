mod catalog;
mod config;
mod errors;
mod jobs;
mod preferences;
mod routes;
mod state;
mod suggestions;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::client::RemoteJobsClient;
use crate::preferences::store::{MemoryPreferenceStore, PreferenceStore, RedisPreferenceStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Preference store: Redis when configured, in-process otherwise
    let preferences: Arc<dyn PreferenceStore> = match &config.redis_url {
        Some(url) => Arc::new(
            RedisPreferenceStore::connect(url)
                .await
                .context("Failed to connect to Redis")?,
        ),
        None => {
            warn!("REDIS_URL not set; preferences are kept in memory only");
            Arc::new(MemoryPreferenceStore::new())
        }
    };

    // Remote jobs client
    let jobs = RemoteJobsClient::new(
        config.jobs_api_url.clone(),
        Duration::from_secs(config.jobs_fetch_timeout_secs),
    )
    .context("Failed to build HTTP client")?;
    info!(
        "Jobs client initialized ({}, limit {})",
        config.jobs_api_url, config.jobs_fetch_limit
    );

    let state = AppState {
        preferences,
        jobs: Arc::new(jobs),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
