use chrono::{DateTime, NaiveDateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_JOB_URL: &str = "https://remotive.com/remote-jobs/";
pub const DEFAULT_REQUIRED_LOCATION: &str = "Worldwide";
pub const DEFAULT_JOB_TYPE: &str = "full_time";

/// One job listing, either from the remote feed or the synthetic generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub url: String,
    pub title: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub job_type: String,
    /// Kept as received; see [`JobPosting::published_at`].
    pub publication_date: String,
    pub candidate_required_location: String,
    pub salary: String,
    /// HTML as delivered by the feed.
    pub description: String,
}

impl JobPosting {
    /// Parses the publication date. The feed sends naive timestamps, which are read as UTC.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.publication_date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// A posting as the remote API sends it. Every field may be absent, and a
/// field of the wrong shape is treated as absent rather than failing the batch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawJobPosting {
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub company_logo: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_string")]
    pub job_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub publication_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub candidate_required_location: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub salary: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

/// Strings pass through, numbers and booleans are stringified, anything else is absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Keeps the string entries of an array; drops nulls and other values.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Value::String(s) => Some(vec![s]),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
pub struct JobsEnvelope {
    pub jobs: Option<Vec<RawJobPosting>>,
}

impl From<RawJobPosting> for JobPosting {
    fn from(raw: RawJobPosting) -> Self {
        JobPosting {
            id: raw.id.and_then(id_to_string).unwrap_or_else(fallback_id),
            url: non_empty(raw.url)
                .unwrap_or_else(|| DEFAULT_JOB_URL.to_string()),
            title: raw.title.unwrap_or_default(),
            company_name: raw.company_name.unwrap_or_default(),
            company_logo: non_empty(raw.company_logo),
            category: raw.category.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            job_type: non_empty(raw.job_type)
                .unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
            publication_date: raw.publication_date.unwrap_or_default(),
            candidate_required_location: non_empty(raw.candidate_required_location)
                .unwrap_or_else(|| DEFAULT_REQUIRED_LOCATION.to_string()),
            salary: raw.salary.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn id_to_string(id: Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// `job-` followed by nine random lowercase alphanumerics.
fn fallback_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b: u8| (b as char).to_ascii_lowercase())
        .collect();
    format!("job-{suffix}")
}
