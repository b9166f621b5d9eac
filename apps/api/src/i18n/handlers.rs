use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::{ApiPath, ApiQuery};
use crate::i18n::{form_options, Bundle, FormOptions, Locale};

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Locale,
}

/// GET /api/v1/options?locale=hi
pub async fn handle_get_options(ApiQuery(params): ApiQuery<LocaleQuery>) -> Json<FormOptions> {
    Json(form_options(params.locale))
}

/// GET /api/v1/i18n/:locale
pub async fn handle_get_bundle(ApiPath(code): ApiPath<String>) -> Result<Json<&'static Bundle>, AppError> {
    let locale = Locale::parse(&code)
        .ok_or_else(|| AppError::NotFound(format!("Locale '{code}' not found")))?;
    Ok(Json(locale.bundle()))
}
