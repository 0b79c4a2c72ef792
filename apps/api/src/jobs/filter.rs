//! Filter/sort chain over a fetched batch of postings.
//!
//! All matching is case-insensitive substring matching. The location
//! predicate is a heuristic: "us" inside "Australia" is a match, and that is
//! accepted.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::catalog::locations::{find_location, is_remote};
use crate::jobs::models::JobPosting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest first.
    #[default]
    Date,
    /// Weighted search-term hits; a no-op without a search term.
    Relevance,
}

/// Everything the listing can be narrowed and ordered by. Empty fields are inactive.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub locations: Vec<String>,
    pub job_types: Vec<String>,
    pub sort: SortMode,
}

impl FilterCriteria {
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Applies text search, location and job-type filters (in that order) and then sorts.
pub fn apply_filters(postings: &[JobPosting], criteria: &FilterCriteria) -> Vec<JobPosting> {
    let term = criteria.search_term();

    let mut filtered: Vec<JobPosting> = postings
        .iter()
        .filter(|job| term.as_deref().map_or(true, |t| matches_search(job, t)))
        .filter(|job| {
            criteria.locations.is_empty()
                || matches_location(&job.candidate_required_location, &criteria.locations)
        })
        .filter(|job| {
            criteria.job_types.is_empty() || matches_job_type(&job.job_type, &criteria.job_types)
        })
        .cloned()
        .collect();

    sort_postings(&mut filtered, criteria.sort, term.as_deref());
    filtered
}

/// `term` must already be lowercase.
pub fn matches_search(job: &JobPosting, term: &str) -> bool {
    contains(&job.title, term)
        || contains(&job.company_name, term)
        || contains(&job.category, term)
        || job.tags.iter().any(|tag| contains(tag, term))
        || contains(&job.description, term)
}

pub fn matches_location<S: AsRef<str>>(job_location: &str, selected: &[S]) -> bool {
    let job_location = job_location.to_lowercase();

    selected.iter().any(|id| {
        let id = id.as_ref().to_lowercase();

        if is_remote(&id) {
            return job_location.is_empty()
                || ["anywhere", "worldwide", "remote"]
                    .iter()
                    .any(|w| job_location.contains(*w));
        }

        if job_location.contains(&id) {
            return true;
        }

        match find_location(&id) {
            Some(location) => {
                location
                    .country
                    .is_some_and(|c| job_location.contains(&c.to_lowercase()))
                    || location.synonyms.iter().any(|s| job_location.contains(*s))
            }
            None => false,
        }
    })
}

/// Only the posting side is normalized (`full_time` → `full time`); labels are
/// just lowercased, so `full-time` does not select `full_time`.
pub fn matches_job_type<S: AsRef<str>>(job_type: &str, selected: &[S]) -> bool {
    let job_type = job_type.to_lowercase().replace('_', " ");
    selected
        .iter()
        .any(|label| job_type.contains(&label.as_ref().to_lowercase()))
}

/// 3 for a title hit, 2 for company, 1 for category. `term` must be lowercase.
pub fn relevance_score(job: &JobPosting, term: &str) -> u32 {
    let mut score = 0;
    if contains(&job.title, term) {
        score += 3;
    }
    if contains(&job.company_name, term) {
        score += 2;
    }
    if contains(&job.category, term) {
        score += 1;
    }
    score
}

/// Stable in both modes.
pub fn sort_postings(postings: &mut [JobPosting], mode: SortMode, term: Option<&str>) {
    match mode {
        SortMode::Date => postings.sort_by_key(|job| Reverse(job.published_at())),
        SortMode::Relevance => {
            if let Some(term) = term.filter(|t| !t.is_empty()) {
                let term = term.to_lowercase();
                postings.sort_by_cached_key(|job| Reverse(relevance_score(job, &term)));
            }
        }
    }
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
