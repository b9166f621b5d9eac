use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::preferences::Preferences;
use crate::state::AppState;

/// GET /api/v1/preferences
pub async fn handle_get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    Json(state.preferences.get().await)
}

/// POST /api/v1/preferences/dark-mode/toggle
pub async fn handle_toggle_dark_mode(
    State(state): State<AppState>,
) -> Result<Json<Preferences>, AppError> {
    let prefs = state.preferences.toggle_dark_mode().await?;
    Ok(Json(prefs))
}
