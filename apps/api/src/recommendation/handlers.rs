//! Axum route handlers for the stateless recommendation API.

use axum::{extract::State, response::Redirect, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::listing::{Listing, ScoredListing};
use crate::models::profile::Profile;
use crate::recommendation::catalog::{catalog, find_listing};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredListing>,
}

/// POST /api/v1/recommendations
///
/// Ranks the catalog for a complete profile. Resolves after the configured
/// fetch latency.
pub async fn handle_recommend(
    State(state): State<AppState>,
    ApiJson(profile): ApiJson<Profile>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let recommendations = state.recommender.recommend(&profile).await?;
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// GET /api/v1/listings
pub async fn handle_list_listings() -> Json<&'static [Listing]> {
    Json(catalog())
}

/// GET /api/v1/listings/:id/apply
///
/// Sends the client to the internship portal. Nothing is tracked afterwards.
pub async fn handle_apply(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Redirect, AppError> {
    let listing =
        find_listing(id).ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))?;
    info!(listing_id = id, company = %listing.company, "apply redirect");
    Ok(Redirect::to(&state.config.apply_url))
}
