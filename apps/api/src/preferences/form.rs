use serde::Deserialize;

use crate::preferences::models::{ExperienceLevel, JobType, Preferences};

/// Body of the preference form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesForm {
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub selected_interests: Vec<String>,
    #[serde(default)]
    pub selected_skills: Vec<String>,
    pub job_type: JobType,
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// A rejected field with the message shown next to it on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Checks the form and folds the picked chips and free text into one record.
pub fn build_preferences(form: PreferencesForm) -> Result<Preferences, FieldError> {
    if form.locations.is_empty() {
        return Err(FieldError {
            field: "locations",
            message: "Please select at least one location",
        });
    }

    if form.selected_interests.is_empty() && is_blank(form.interests.as_deref()) {
        return Err(FieldError {
            field: "interests",
            message: "Please select at least one interest or add a custom one",
        });
    }

    if form.selected_skills.is_empty() && is_blank(form.skills.as_deref()) {
        return Err(FieldError {
            field: "skills",
            message: "Please select at least one skill or add a custom one",
        });
    }

    Ok(Preferences {
        interests: combine(&form.selected_interests, form.interests.as_deref()),
        skills: combine(&form.selected_skills, form.skills.as_deref()),
        selected_interests: form.selected_interests,
        selected_skills: form.selected_skills,
        job_type: form.job_type,
        experience: form.experience,
        locations: form.locations,
    })
}

fn is_blank(text: Option<&str>) -> bool {
    text.map(|t| t.trim().is_empty()).unwrap_or(true)
}

fn combine(selected: &[String], free_text: Option<&str>) -> String {
    selected
        .iter()
        .map(String::as_str)
        .chain(free_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PreferencesForm {
        PreferencesForm {
            interests: None,
            skills: None,
            selected_interests: vec!["Data Science".to_string()],
            selected_skills: vec!["Python".to_string()],
            job_type: JobType::Contract,
            experience: ExperienceLevel::Entry,
            locations: vec!["uk".to_string()],
        }
    }

    #[test]
    fn test_selected_and_free_text_are_joined() {
        let mut f = form();
        f.interests = Some("climate tech".to_string());
        f.selected_skills.push("SQL".to_string());

        let prefs = build_preferences(f).unwrap();
        assert_eq!(prefs.interests, "Data Science, climate tech");
        assert_eq!(prefs.skills, "Python, SQL");
        assert_eq!(prefs.selected_interests, vec!["Data Science"]);
    }

    #[test]
    fn test_free_text_alone_is_enough() {
        let mut f = form();
        f.selected_interests.clear();
        f.interests = Some("writing".to_string());

        let prefs = build_preferences(f).unwrap();
        assert_eq!(prefs.interests, "writing");
    }

    #[test]
    fn test_empty_free_text_is_dropped() {
        let mut f = form();
        f.skills = Some(String::new());
        assert_eq!(build_preferences(f).unwrap().skills, "Python");
    }

    #[test]
    fn test_missing_locations_rejected() {
        let mut f = form();
        f.locations.clear();
        let err = build_preferences(f).unwrap_err();
        assert_eq!(err.field, "locations");
    }

    #[test]
    fn test_blank_interests_rejected() {
        let mut f = form();
        f.selected_interests.clear();
        f.interests = Some("   ".to_string());
        let err = build_preferences(f).unwrap_err();
        assert_eq!(err.field, "interests");
        assert!(err.message.contains("interest"));
    }

    #[test]
    fn test_missing_skills_rejected() {
        let mut f = form();
        f.selected_skills.clear();
        assert_eq!(build_preferences(f).unwrap_err().field, "skills");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut f = form();
        f.selected_interests.push("Data Science".to_string());
        let prefs = build_preferences(f).unwrap();
        assert_eq!(prefs.selected_interests.len(), 2);
        assert_eq!(prefs.interests, "Data Science, Data Science");
    }
}
