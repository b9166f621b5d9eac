// Recommendation engine: static catalog, fit scoring, async recommender seam.
// Scoring is pure and synchronous; only the Recommender trait carries latency.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod scoring;

pub use engine::{CatalogRecommender, Recommender};
