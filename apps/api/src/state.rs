use std::sync::Arc;

use crate::config::Config;
use crate::jobs::client::JobSource;
use crate::preferences::store::PreferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Redis when `REDIS_URL` is set, otherwise an in-process map.
    pub preferences: Arc<dyn PreferenceStore>,
    /// Remote jobs endpoint. Tests swap in fixed sources.
    pub jobs: Arc<dyn JobSource>,
    pub config: Config,
}
