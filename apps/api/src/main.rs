mod chat;
mod config;
mod errors;
mod extract;
mod i18n;
mod models;
mod preferences;
mod profile;
mod recommendation;
mod routes;
mod state;
mod wizard;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::preferences::{FilePreferenceStore, PreferenceService};
use crate::profile::voice::UnavailableRecognizer;
use crate::recommendation::CatalogRecommender;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::dispatch::spawn_session_sweeper;
use crate::wizard::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PM Internship API v{}", env!("CARGO_PKG_VERSION"));

    // Dark-mode flag is read once here and written through on every toggle
    let store = FilePreferenceStore::new(&config.prefs_path);
    info!("Preference store at {}", store.path().display());
    let preferences = PreferenceService::load(Arc::new(store))
        .with_context(|| format!("loading preferences from {}", config.prefs_path.display()))?;

    let recommender = Arc::new(CatalogRecommender::new(config.recommend_delay));
    info!(
        "Recommender ready (latency {}ms, chat delay {}ms)",
        config.recommend_delay.as_millis(),
        config.chat_delay.as_millis()
    );

    let sessions = Arc::new(SessionStore::new(config.session_ttl));
    spawn_session_sweeper(sessions.clone());
    info!("Sessions expire after {}s idle", config.session_ttl.as_secs());

    let state = AppState {
        config: config.clone(),
        recommender,
        recognizer: Arc::new(UnavailableRecognizer),
        sessions,
        preferences: Arc::new(preferences),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
