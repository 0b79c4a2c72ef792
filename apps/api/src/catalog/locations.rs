use serde::Serialize;

/// A location the preference form offers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub label: &'static str,
    /// Country name looked for in a posting's location string. `None` for remote.
    #[serde(skip)]
    pub country: Option<&'static str>,
    /// Extra substrings accepted for this location.
    #[serde(skip)]
    pub synonyms: &'static [&'static str],
    /// What synthetic postings print as their required location.
    #[serde(skip)]
    pub display_name: &'static str,
}

pub const LOCATIONS: &[Location] = &[
    Location {
        id: "morocco",
        label: "Morocco",
        country: Some("Morocco"),
        synonyms: &[],
        display_name: "Morocco",
    },
    Location {
        id: "germany",
        label: "Germany",
        country: Some("Germany"),
        synonyms: &[],
        display_name: "Germany",
    },
    Location {
        id: "online",
        label: "Remote/Online",
        country: None,
        synonyms: &[],
        display_name: "Worldwide / Remote",
    },
    Location {
        id: "usa",
        label: "United States",
        country: Some("USA"),
        synonyms: &["united states", "america", "us"],
        display_name: "United States",
    },
    Location {
        id: "uk",
        label: "United Kingdom",
        country: Some("UK"),
        synonyms: &["united kingdom", "britain", "england"],
        display_name: "United Kingdom",
    },
    Location {
        id: "canada",
        label: "Canada",
        country: Some("Canada"),
        synonyms: &[],
        display_name: "Canada",
    },
];

/// Locations used when nothing narrower was requested.
pub const DEFAULT_LOCATION_IDS: &[&str] =
    &["remote", "morocco", "germany", "usa", "uk", "canada"];

pub fn is_remote(id: &str) -> bool {
    id.eq_ignore_ascii_case("online") || id.eq_ignore_ascii_case("remote")
}

/// Looks up a location by id, case-insensitively. `remote` resolves to `online`.
pub fn find_location(id: &str) -> Option<&'static Location> {
    let id = if is_remote(id) { "online" } else { id };
    LOCATIONS.iter().find(|l| l.id.eq_ignore_ascii_case(id))
}
