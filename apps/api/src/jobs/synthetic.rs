//! Stand-in postings for when the remote feed is unreachable.
//!
//! Output only has to look like a feed: non-empty, plausibly shaped, spread
//! over the requested locations.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::catalog::locations::{find_location, DEFAULT_LOCATION_IDS};
use crate::jobs::models::{JobPosting, DEFAULT_JOB_URL};

const MIN_POSTINGS: usize = 15;
const MAX_POSTINGS_EXCLUSIVE: usize = 25;
const MAX_AGE_DAYS: i64 = 30;

const ENGINEERING_TITLES: &[&str] = &[
    "Software Developer",
    "Frontend Engineer",
    "Backend Developer",
    "Full Stack Developer",
    "Mobile App Developer",
    "DevOps Engineer",
];

const DATA_TITLES: &[&str] = &[
    "Data Scientist",
    "Data Analyst",
    "Business Intelligence Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
];

const GENERAL_TITLES: &[&str] = &[
    "Software Developer",
    "Data Analyst",
    "UX Designer",
    "Project Manager",
    "Digital Marketing Specialist",
    "Content Creator",
];

const JOB_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship", "remote"];

const COMPANIES: &[&str] = &[
    "TechCorp",
    "Global Innovations",
    "NextGen Solutions",
    "Digital Frontiers",
    "Creative Minds",
    "Data Insights",
    "Future Technologies",
    "Web Experts",
];

/// Generates postings with the thread RNG, dated relative to now.
pub fn generate_postings<S: AsRef<str>>(query: &str, locations: &[S]) -> Vec<JobPosting> {
    generate_postings_with(&mut rand::rng(), Utc::now(), query, locations)
}

pub fn generate_postings_with<R: Rng + ?Sized, S: AsRef<str>>(
    rng: &mut R,
    now: DateTime<Utc>,
    query: &str,
    locations: &[S],
) -> Vec<JobPosting> {
    let location_ids: Vec<&str> = if locations.is_empty() {
        DEFAULT_LOCATION_IDS.to_vec()
    } else {
        locations.iter().map(AsRef::as_ref).collect()
    };

    let titles = title_pool(query);
    let count = rng.random_range(MIN_POSTINGS..MAX_POSTINGS_EXCLUSIVE);

    (0..count)
        .map(|i| {
            let days_ago = rng.random_range(0..MAX_AGE_DAYS);
            let title = pick(rng, titles);
            let location_id = location_ids[i % location_ids.len()];

            JobPosting {
                id: format!("job-{i}"),
                url: DEFAULT_JOB_URL.to_string(),
                title: title.to_string(),
                company_name: pick(rng, COMPANIES).to_string(),
                company_logo: None,
                category: String::new(),
                tags: vec![],
                job_type: pick(rng, JOB_TYPES).to_string(),
                publication_date: (now - Duration::days(days_ago))
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                candidate_required_location: find_location(location_id)
                    .map(|l| l.display_name.to_string())
                    .unwrap_or_default(),
                salary: String::new(),
                description: format!(
                    "We are seeking a talented {title} to join our team. The ideal candidate \
                     will have experience in {query} and a passion for innovation."
                ),
            }
        })
        .collect()
}

fn title_pool(query: &str) -> &'static [&'static str] {
    let query = query.to_lowercase();
    if query.contains("develop") || query.contains("program") {
        ENGINEERING_TITLES
    } else if query.contains("data") || query.contains("analy") {
        DATA_TITLES
    } else {
        GENERAL_TITLES
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_count_is_within_bounds_and_fields_filled() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let jobs = generate_postings_with(&mut rng, now(), "anything", &["usa"]);
            assert!((15..=24).contains(&jobs.len()), "got {}", jobs.len());
            for job in &jobs {
                assert!(!job.id.is_empty());
                assert!(!job.url.is_empty());
            }
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let jobs = generate_postings_with(&mut rng, now(), "", &["uk"]);
        assert_eq!(jobs[0].id, "job-0");
        assert_eq!(jobs[1].id, "job-1");
    }

    #[test]
    fn test_locations_round_robin() {
        let mut rng = StdRng::seed_from_u64(1);
        let jobs = generate_postings_with(&mut rng, now(), "", &["morocco", "online", "atlantis"]);
        assert_eq!(jobs[0].candidate_required_location, "Morocco");
        assert_eq!(jobs[1].candidate_required_location, "Worldwide / Remote");
        assert_eq!(jobs[2].candidate_required_location, "");
        assert_eq!(jobs[3].candidate_required_location, "Morocco");
    }

    #[test]
    fn test_default_locations_when_none_requested() {
        let mut rng = StdRng::seed_from_u64(2);
        let jobs = generate_postings_with::<_, &str>(&mut rng, now(), "", &[]);
        let expected = [
            "Worldwide / Remote",
            "Morocco",
            "Germany",
            "United States",
            "United Kingdom",
            "Canada",
        ];
        for (job, want) in jobs.iter().zip(expected.iter().cycle()) {
            assert_eq!(&job.candidate_required_location, want);
        }
    }

    #[test]
    fn test_title_pool_follows_query_keywords() {
        let mut rng = StdRng::seed_from_u64(3);
        for job in generate_postings_with(&mut rng, now(), "Backend DEVELOPMENT", &["usa"]) {
            assert!(ENGINEERING_TITLES.contains(&job.title.as_str()));
        }
        for job in generate_postings_with(&mut rng, now(), "data analysis", &["usa"]) {
            assert!(DATA_TITLES.contains(&job.title.as_str()));
        }
        for job in generate_postings_with(&mut rng, now(), "gardening", &["usa"]) {
            assert!(GENERAL_TITLES.contains(&job.title.as_str()));
        }
    }

    #[test]
    fn test_dates_within_last_30_days() {
        let mut rng = StdRng::seed_from_u64(4);
        for job in generate_postings_with(&mut rng, now(), "", &["canada"]) {
            let published = job.published_at().expect("generated date parses");
            let age = now() - published;
            assert!(age >= Duration::zero() && age < Duration::days(30));
        }
    }

    #[test]
    fn test_description_mentions_title_and_query() {
        let mut rng = StdRng::seed_from_u64(5);
        let jobs = generate_postings_with(&mut rng, now(), "rust", &["germany"]);
        let job = &jobs[0];
        assert!(job.description.contains(&job.title));
        assert!(job.description.contains("experience in rust"));
        assert!(COMPANIES.contains(&job.company_name.as_str()));
        assert!(JOB_TYPES.contains(&job.job_type.as_str()));
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let jobs = generate_postings("software developer", &["remote"]);
        assert!(jobs.len() >= 15);
        assert!(jobs
            .iter()
            .all(|j| j.candidate_required_location == "Worldwide / Remote"));
    }
}
