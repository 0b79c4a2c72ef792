use crate::suggestions::careers::{CareerSuggestion, BUSINESS, CREATIVE, TECHNOLOGY};

/// Keyword group → the career list it unlocks. Checked in this order.
const GROUPS: &[(&[&str], &[CareerSuggestion])] = &[
    (&["code", "program", "develop", "tech"], TECHNOLOGY),
    (&["business", "market", "manage"], BUSINESS),
    (&["design", "creat", "art", "writ"], CREATIVE),
];

/// Picks career suggestions by keyword-matching the interests text.
///
/// Every matching group contributes its whole list. With no match, the first
/// entry of each group is returned so the page is never empty.
pub fn select_suggestions(interests: &str) -> Vec<CareerSuggestion> {
    let interests = interests.to_lowercase();

    let selected: Vec<CareerSuggestion> = GROUPS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| interests.contains(*k)))
        .flat_map(|(_, careers)| careers.iter().copied())
        .collect();

    if !selected.is_empty() {
        return selected;
    }

    GROUPS
        .iter()
        .filter_map(|(_, careers)| careers.first().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(suggestions: &[CareerSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_coding_interests_select_technology() {
        let suggestions = select_suggestions("I love coding and development");
        assert_eq!(
            titles(&suggestions),
            vec!["Software Developer", "Data Scientist", "UX/UI Designer"]
        );
    }

    #[test]
    fn test_groups_are_unioned_in_order() {
        let suggestions = select_suggestions("Marketing, Graphic Design");
        assert_eq!(
            titles(&suggestions),
            vec![
                "Digital Marketing Specialist",
                "Project Manager",
                "Content Creator",
                "Graphic Designer"
            ]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select_suggestions("TECH").len(), 3);
    }

    #[test]
    fn test_no_match_returns_one_per_group() {
        let suggestions = select_suggestions("gardening and hiking");
        assert_eq!(
            titles(&suggestions),
            vec![
                "Software Developer",
                "Digital Marketing Specialist",
                "Content Creator"
            ]
        );
    }

    #[test]
    fn test_empty_interests_fall_back() {
        assert_eq!(select_suggestions("").len(), 3);
    }

    #[test]
    fn test_all_groups() {
        // "art" also matches inside "start"; substring matching is intended.
        let suggestions = select_suggestions("tech startup business");
        assert_eq!(suggestions.len(), 7);
    }
}
