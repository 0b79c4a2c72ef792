use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::preferences::models::Preferences;
use crate::preferences::store::{load_preferences, StoredPreferences};
use crate::state::AppState;
use crate::suggestions::careers::CareerSuggestion;
use crate::suggestions::selector::select_suggestions;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub preferences: Preferences,
    pub suggestions: Vec<CareerSuggestion>,
}

/// GET /api/v1/profiles/:profile_id/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let stored = load_preferences(state.preferences.as_ref(), profile_id)
        .await?;
    let preferences = match stored {
        StoredPreferences::Found(p) => p,
        StoredPreferences::Missing => {
            return Err(AppError::PreferencesMissing {
                form_path: format!("/api/v1/profiles/{profile_id}/preferences"),
            })
        }
        StoredPreferences::Unreadable(_) => {
            return Err(AppError::UnprocessableEntity(
                "An error occurred while processing your preferences. Please try again."
                    .to_string(),
            ))
        }
    };

    let suggestions = select_suggestions(&preferences.interests);
    tracing::debug!(
        "Selected {} suggestions for profile {profile_id}",
        suggestions.len()
    );

    Ok(Json(SuggestionsResponse {
        preferences,
        suggestions,
    }))
}
