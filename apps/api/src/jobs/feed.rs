//! Feed loading: search parameters from preferences, one fetch, and the
//! synthetic fallback when the fetch fails.

use serde::Serialize;
use tracing::{error, info};

use crate::jobs::client::JobSource;
use crate::jobs::models::JobPosting;
use crate::jobs::synthetic::generate_postings;
use crate::preferences::store::StoredPreferences;

pub const DEFAULT_QUERY: &str = "software developer";
pub const DEFAULT_LOCATION: &str = "remote";
pub const UNREADABLE_PREFERENCES_ADVISORY: &str =
    "An error occurred while loading your preferences. Using default search parameters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    Remote,
    Synthetic,
}

/// What to ask the jobs endpoint for.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub locations: Vec<String>,
    /// Set when the stored record could not be used.
    pub advisory: Option<String>,
}

impl SearchParams {
    pub fn defaults() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            locations: vec![DEFAULT_LOCATION.to_string()],
            advisory: None,
        }
    }

    pub fn from_stored(stored: &StoredPreferences) -> Self {
        match stored {
            StoredPreferences::Found(prefs) => Self {
                query: prefs.search_query(),
                locations: prefs.locations.clone(),
                advisory: None,
            },
            StoredPreferences::Missing => Self::defaults(),
            StoredPreferences::Unreadable(_) => Self {
                advisory: Some(UNREADABLE_PREFERENCES_ADVISORY.to_string()),
                ..Self::defaults()
            },
        }
    }
}

/// A fetched batch, before any filtering.
#[derive(Debug, Clone)]
pub struct JobFeed {
    pub postings: Vec<JobPosting>,
    pub source: FeedSource,
    pub advisory: Option<String>,
}

/// Fetches postings for `query`. A failed fetch never surfaces as an error:
/// it is logged, turned into an advisory, and masked with synthetic postings.
pub async fn load_feed(
    source: &dyn JobSource,
    query: &str,
    locations: &[String],
    limit: u32,
) -> JobFeed {
    match source.fetch(query, limit).await {
        Ok(postings) => {
            info!("Loaded {} postings from the remote feed", postings.len());
            JobFeed {
                postings,
                source: FeedSource::Remote,
                advisory: None,
            }
        }
        Err(e) => {
            error!("Error fetching jobs: {e}");
            let postings = generate_postings(query, locations);
            info!("Serving {} synthetic postings", postings.len());
            JobFeed {
                postings,
                source: FeedSource::Synthetic,
                advisory: Some(format!("Failed to fetch job listings: {e}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::client::{FetchError, RemoteJobsClient};
    use crate::preferences::models::{ExperienceLevel, JobType, Preferences};
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct FixedSource(Vec<JobPosting>);

    #[async_trait]
    impl JobSource for FixedSource {
        async fn fetch(&self, _query: &str, _limit: u32) -> Result<Vec<JobPosting>, FetchError> {
            if self.0.is_empty() {
                Err(FetchError::Empty)
            } else {
                Ok(self.0.clone())
            }
        }
    }

    fn posting(id: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            url: "https://example.com".to_string(),
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            company_logo: None,
            category: String::new(),
            tags: vec![],
            job_type: "full_time".to_string(),
            publication_date: "2024-01-01T00:00:00".to_string(),
            candidate_required_location: "Worldwide".to_string(),
            salary: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_params_from_found_preferences() {
        let prefs = Preferences {
            interests: "Data Science".to_string(),
            skills: "Python".to_string(),
            selected_interests: vec![],
            selected_skills: vec![],
            job_type: JobType::FullTime,
            experience: ExperienceLevel::Junior,
            locations: vec!["germany".to_string()],
        };
        let params = SearchParams::from_stored(&StoredPreferences::Found(prefs));
        assert_eq!(params.query, "Data Science Python");
        assert_eq!(params.locations, vec!["germany"]);
        assert!(params.advisory.is_none());
    }

    #[test]
    fn test_params_default_when_missing() {
        assert_eq!(
            SearchParams::from_stored(&StoredPreferences::Missing),
            SearchParams::defaults()
        );
    }

    #[test]
    fn test_params_default_with_advisory_when_unreadable() {
        let err = serde_json::from_str::<Preferences>("nope").unwrap_err();
        let params = SearchParams::from_stored(&StoredPreferences::Unreadable(err));
        assert_eq!(params.query, DEFAULT_QUERY);
        assert_eq!(params.locations, vec![DEFAULT_LOCATION]);
        assert_eq!(
            params.advisory.as_deref(),
            Some(UNREADABLE_PREFERENCES_ADVISORY)
        );
    }

    #[tokio::test]
    async fn test_successful_fetch_is_remote() {
        let source = FixedSource(vec![posting("1"), posting("2")]);
        let feed = load_feed(&source, "rust", &[], 100).await;
        assert_eq!(feed.source, FeedSource::Remote);
        assert_eq!(feed.postings.len(), 2);
        assert!(feed.advisory.is_none());
    }

    #[tokio::test]
    async fn test_empty_fetch_falls_back() {
        let feed = load_feed(&FixedSource(vec![]), "rust", &["uk".to_string()], 100)
            .await;
        assert_eq!(feed.source, FeedSource::Synthetic);
        assert!(feed
            .postings
            .iter()
            .all(|p| p.candidate_required_location == "United Kingdom"));
        assert_eq!(
            feed.advisory.as_deref(),
            Some("Failed to fetch job listings: No jobs found in API response")
        );
    }

    #[tokio::test]
    async fn test_http_500_falls_back_to_synthetic_postings() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/remote-jobs");
                then.status(500);
            })
            .await;
        let client = RemoteJobsClient::new(server.url("/api/remote-jobs"), Duration::from_secs(5))
            .unwrap();

        let feed = load_feed(&client, "developer", &["usa".to_string()], 100)
            .await;

        assert_eq!(feed.source, FeedSource::Synthetic);
        assert!((15..=24).contains(&feed.postings.len()));
        assert!(feed
            .postings
            .iter()
            .all(|p| !p.id.is_empty() && !p.url.is_empty()));
        let advisory = feed.advisory.expect("advisory recorded");
        assert!(advisory.contains("500"), "advisory was {advisory}");
    }
}
