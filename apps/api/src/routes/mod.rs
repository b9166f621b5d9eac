pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::chat::handlers as chat;
use crate::i18n::handlers as i18n;
use crate::preferences::handlers as preferences;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static tables
        .route("/api/v1/options", get(i18n::handle_get_options))
        .route("/api/v1/i18n/:locale", get(i18n::handle_get_bundle))
        // Stateless engine
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .route("/api/v1/listings", get(recommendation::handle_list_listings))
        .route(
            "/api/v1/listings/:id/apply",
            get(recommendation::handle_apply),
        )
        .route("/api/v1/chat/respond", post(chat::handle_respond))
        .route("/api/v1/chat/quick-replies", get(chat::handle_quick_replies))
        // Preferences
        .route(
            "/api/v1/preferences",
            get(preferences::handle_get_preferences),
        )
        .route(
            "/api/v1/preferences/dark-mode/toggle",
            post(preferences::handle_toggle_dark_mode),
        )
        // Wizard sessions
        .route("/api/v1/sessions", post(wizard::handle_create_session))
        .route("/api/v1/sessions/:id", get(wizard::handle_get_session))
        .route("/api/v1/sessions/:id/start", post(wizard::handle_start))
        .route("/api/v1/sessions/:id/back", post(wizard::handle_back))
        .route(
            "/api/v1/sessions/:id/profile",
            patch(wizard::handle_edit_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/voice",
            post(wizard::handle_voice_location),
        )
        .route("/api/v1/sessions/:id/submit", post(wizard::handle_submit))
        .route("/api/v1/sessions/:id/chat", post(wizard::handle_send_chat))
        .route("/api/v1/sessions/:id/locale", put(wizard::handle_set_locale))
        .with_state(state)
}
