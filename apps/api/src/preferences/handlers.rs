use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::preferences::form::{build_preferences, PreferencesForm};
use crate::preferences::models::Preferences;
use crate::preferences::store::{load_preferences, save_preferences, StoredPreferences};
use crate::state::AppState;

/// PUT /api/v1/profiles/:profile_id/preferences
///
/// Validates the form and replaces the stored record.
pub async fn handle_submit_preferences(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Json(form): Json<PreferencesForm>,
) -> Result<Json<Preferences>, AppError> {
    let preferences = build_preferences(form)
        .map_err(|e| AppError::Validation(format!("{}: {}", e.field, e.message)))?;

    save_preferences(state.preferences.as_ref(), profile_id, &preferences)
        .await?;
    tracing::info!("Preferences submitted for profile {profile_id}");

    Ok(Json(preferences))
}

/// GET /api/v1/profiles/:profile_id/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Preferences>, AppError> {
    let stored = load_preferences(state.preferences.as_ref(), profile_id)
        .await?;
    match stored {
        StoredPreferences::Found(p) => Ok(Json(p)),
        StoredPreferences::Missing => Err(AppError::NotFound(format!(
            "No preferences stored for profile {profile_id}"
        ))),
        StoredPreferences::Unreadable(e) => Err(AppError::UnprocessableEntity(format!(
            "Stored preferences could not be read: {e}"
        ))),
    }
}
