use serde::{Deserialize, Serialize};

/// Employment type chosen on the preference form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
    Freelance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Executive,
}

/// The stored preferences record. Written once per form submission and
/// replaced wholesale on the next one; duplicates in the lists are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Selected interests and the free-text field, joined with ", ".
    pub interests: String,
    pub skills: String,
    #[serde(default)]
    pub selected_interests: Vec<String>,
    #[serde(default)]
    pub selected_skills: Vec<String>,
    pub job_type: JobType,
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Preferences {
    /// Free-text query sent to the jobs endpoint, capped at 100 characters.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.interests, self.skills)
            .chars()
            .take(100)
            .collect()
    }
}
