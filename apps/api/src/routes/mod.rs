pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::jobs::handlers as jobs;
use crate::preferences::handlers as preferences;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/catalog/interests", get(catalog::handle_interests))
        .route("/api/v1/catalog/skills", get(catalog::handle_skills))
        .route("/api/v1/catalog/locations", get(catalog::handle_locations))
        // Profiles
        .route(
            "/api/v1/profiles/:profile_id/preferences",
            put(preferences::handle_submit_preferences).get(preferences::handle_get_preferences),
        )
        .route(
            "/api/v1/profiles/:profile_id/suggestions",
            get(suggestions::handle_suggestions),
        )
        .route(
            "/api/v1/profiles/:profile_id/jobs",
            get(jobs::handle_profile_jobs),
        )
        // Listings without a profile
        .route("/api/v1/jobs", get(jobs::handle_jobs))
        .with_state(state)
}
