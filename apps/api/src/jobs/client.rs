//! Remote jobs client: one GET per listing request, no retries.
//!
//! Any failure is returned as a `FetchError`; substituting synthetic
//! postings is the feed layer's call, not the client's.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::jobs::models::{JobPosting, JobsEnvelope};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No jobs found in API response")]
    Empty,
}

/// Source of job postings. Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<JobPosting>, FetchError>;
}

#[derive(Clone)]
pub struct RemoteJobsClient {
    client: Client,
    endpoint: String,
}

impl RemoteJobsClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl JobSource for RemoteJobsClient {
    async fn fetch(&self, query: &str, limit: u32) -> Result<Vec<JobPosting>, FetchError> {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(2);
        let query = query.trim();
        if !query.is_empty() {
            params.push(("search", query.to_string()));
        }
        params.push(("limit", limit.to_string()));

        info!("Fetching jobs from {} (search={query:?})", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: JobsEnvelope = serde_json::from_str(&body)?;
        let raw = envelope.jobs.unwrap_or_default();
        debug!("API returned {} total jobs", raw.len());

        if raw.is_empty() {
            return Err(FetchError::Empty);
        }

        Ok(raw.into_iter().map(JobPosting::from).collect())
    }
}
