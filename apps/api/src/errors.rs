use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::preferences::PreferenceError;
use crate::profile::ProfileError;
use crate::wizard::WizardError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Preference storage error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        AppError::UnprocessableEntity(e.to_string())
    }
}

impl From<WizardError> for AppError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::WrongStep { .. } => AppError::Validation(e.to_string()),
            WizardError::Profile(inner) => inner.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the target type.
            JsonRejection::JsonDataError(e) => AppError::UnprocessableEntity(e.body_text()),
            other => AppError::Validation(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Preferences(e) => {
                tracing::error!("Preference storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PREFERENCES_ERROR",
                    "Preferences could not be saved".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::session::Step;

    #[test]
    fn test_incomplete_profile_maps_to_422() {
        let err: AppError = WizardError::Profile(ProfileError::Incomplete {
            missing: vec!["skills"],
        })
        .into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_wrong_step_maps_to_400() {
        let err: AppError = WizardError::WrongStep {
            expected: Step::Form,
            actual: Step::Landing,
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Session x not found".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
