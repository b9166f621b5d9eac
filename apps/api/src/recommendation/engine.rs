//! Recommender: async seam over the pure ranking in `scoring`.
//!
//! `AppState` holds an `Arc<dyn Recommender>`. The default `CatalogRecommender`
//! ranks the static catalog after a simulated fetch latency.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::listing::{Listing, ScoredListing};
use crate::models::profile::Profile;
use crate::recommendation::catalog::catalog;
use crate::recommendation::scoring::rank_listings;

/// Implement this to swap recommendation backends without touching handlers
/// or the wizard.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, profile: &Profile) -> Result<Vec<ScoredListing>, AppError>;
}

/// Ranks a fixed listing set. Sleeps on the tokio timer, never blocks the
/// worker thread.
pub struct CatalogRecommender {
    listings: &'static [Listing],
    latency: Duration,
}

impl CatalogRecommender {
    pub fn new(latency: Duration) -> Self {
        Self {
            listings: catalog(),
            latency,
        }
    }
}

#[async_trait]
impl Recommender for CatalogRecommender {
    async fn recommend(&self, profile: &Profile) -> Result<Vec<ScoredListing>, AppError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let results = rank_listings(self.listings, profile);
        debug!(
            sector = profile.sector.key(),
            top_score = results.first().map(|r| r.score).unwrap_or(0),
            count = results.len(),
            "ranked catalog"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Sector};
    use tokio::time::Instant;

    fn profile() -> Profile {
        Profile {
            education: Education::Graduate,
            skills: vec!["Python".to_string(), "SQL".to_string()],
            sector: Sector::DataScience,
            location: "Bengaluru".to_string(),
            remote_ok: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_recommend_waits_for_latency() {
        let recommender = CatalogRecommender::new(Duration::from_millis(1000));
        let started = Instant::now();

        let results = recommender.recommend(&profile()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(results[0].score, 80);
    }

    #[tokio::test]
    async fn test_recommend_zero_latency_returns_ranked_catalog() {
        let recommender = CatalogRecommender::new(Duration::ZERO);
        let results = recommender.recommend(&profile()).await.unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].listing.id, 1);
    }
}
