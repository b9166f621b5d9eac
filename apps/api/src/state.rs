use std::sync::Arc;

use crate::config::Config;
use crate::preferences::PreferenceService;
use crate::profile::SpeechRecognizer;
use crate::recommendation::Recommender;
use crate::wizard::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recommender. Default: CatalogRecommender over the static catalog.
    pub recommender: Arc<dyn Recommender>,
    /// Voice capture for the location field; unavailable when headless.
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub sessions: Arc<SessionStore>,
    pub preferences: Arc<PreferenceService>,
}
