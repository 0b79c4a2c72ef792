use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::interests::{suggested_skills, INTEREST_SUGGESTIONS};
use crate::catalog::locations::{Location, LOCATIONS};

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    /// Comma-separated interest names.
    #[serde(default)]
    pub interests: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<&'static str>,
}

/// GET /api/v1/catalog/interests
pub async fn handle_interests() -> Json<&'static [&'static str]> {
    Json(INTEREST_SUGGESTIONS)
}

/// GET /api/v1/catalog/skills?interests=Data Science,DevOps
pub async fn handle_skills(Query(query): Query<SkillsQuery>) -> Json<SkillsResponse> {
    let interests = split_list(query.interests.as_deref());
    Json(SkillsResponse {
        skills: suggested_skills(&interests),
    })
}

/// GET /api/v1/catalog/locations
pub async fn handle_locations() -> Json<&'static [Location]> {
    Json(LOCATIONS)
}

/// Splits a comma-separated query value, dropping empty items.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
