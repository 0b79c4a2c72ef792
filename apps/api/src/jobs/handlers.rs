//! Axum route handlers for the job listings API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::handlers::split_list;
use crate::errors::AppError;
use crate::jobs::feed::{load_feed, FeedSource, SearchParams};
use crate::jobs::filter::{apply_filters, FilterCriteria, SortMode};
use crate::jobs::format::posted_label;
use crate::jobs::models::JobPosting;
use crate::preferences::store::load_preferences;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub search: Option<String>,
    /// Comma-separated location ids. Absent means "use the profile's locations".
    pub locations: Option<String>,
    /// Comma-separated job-type labels.
    pub job_types: Option<String>,
    #[serde(default)]
    pub sort: SortMode,
}

#[derive(Debug, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub posting: JobPosting,
    /// Relative age, e.g. "3 days ago". Absent when the date does not parse.
    pub posted: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListingResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
    /// Size of the batch before filtering.
    pub fetched: usize,
    pub source: FeedSource,
    pub search_query: String,
    pub advisories: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profiles/:profile_id/jobs
///
/// Searches with the profile's interests and skills, then filters and sorts.
/// Falls back to default search parameters when no usable record is stored.
pub async fn handle_profile_jobs(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<JobListingResponse>, AppError> {
    let stored = load_preferences(state.preferences.as_ref(), profile_id)
        .await?;
    let params = SearchParams::from_stored(&stored);
    Ok(Json(build_listing(&state, params, query).await))
}

/// GET /api/v1/jobs
///
/// Same listing without a profile, using the default search parameters.
pub async fn handle_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Json<JobListingResponse> {
    Json(build_listing(&state, SearchParams::defaults(), query).await)
}

async fn build_listing(
    state: &AppState,
    params: SearchParams,
    query: JobsQuery,
) -> JobListingResponse {
    let mut advisories: Vec<String> = params.advisory.into_iter().collect();

    let feed = load_feed(
        state.jobs.as_ref(),
        &params.query,
        &params.locations,
        state.config.jobs_fetch_limit,
    )
    .await;
    advisories.extend(feed.advisory);

    let criteria = FilterCriteria {
        search: query.search,
        locations: match query.locations.as_deref() {
            Some(raw) => split_list(Some(raw)),
            None => params.locations,
        },
        job_types: split_list(query.job_types.as_deref()),
        sort: query.sort,
    };

    let filtered = apply_filters(&feed.postings, &criteria);
    if filtered.is_empty() {
        tracing::debug!("No jobs match the current filters");
    }

    let now = Utc::now();
    let jobs: Vec<JobListing> = filtered
        .into_iter()
        .map(|posting| JobListing {
            posted: posting.published_at().map(|at| posted_label(at, now)),
            posting,
        })
        .collect();

    JobListingResponse {
        total: jobs.len(),
        jobs,
        fetched: feed.postings.len(),
        source: feed.source,
        search_query: params.query,
        advisories,
    }
}
