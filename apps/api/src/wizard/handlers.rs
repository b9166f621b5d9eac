//! Axum route handlers for the session-based wizard.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::i18n::handlers::LocaleQuery;
use crate::i18n::Locale;
use crate::profile::ProfileEdit;
use crate::state::AppState;
use crate::wizard::dispatch::{spawn_chat_reply, spawn_recommendation_fetch};
use crate::wizard::{Session, SessionView};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LocaleRequest {
    pub locale: Locale,
}

async fn render(state: &AppState, session: &Session) -> Json<SessionView> {
    let prefs = state.preferences.get().await;
    Json(session.view(prefs.dark_mode))
}

async fn transition(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut Session) -> Result<(), AppError>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .update(id, |s| f(s).map(|_| s.clone()))
        .await??;
    Ok(render(state, &session).await)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions?locale=en
pub async fn handle_create_session(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LocaleQuery>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create(params.locale).await;
    info!(session_id = %session.id, locale = params.locale.code(), "session created");
    (StatusCode::CREATED, render(&state, &session).await)
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(render(&state, &session).await)
}

/// POST /api/v1/sessions/:id/start
pub async fn handle_start(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| Ok(s.start()?)).await
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| {
        s.back();
        Ok(())
    })
    .await
}

/// PATCH /api/v1/sessions/:id/profile
pub async fn handle_edit_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(edit): ApiJson<ProfileEdit>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| Ok(s.edit(edit)?)).await
}

/// POST /api/v1/sessions/:id/profile/voice
///
/// Listens once; a transcript becomes the location, a failure is ignored.
pub async fn handle_voice_location(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    // Fail fast on unknown sessions before opening the microphone.
    state.sessions.get(id).await?;
    let outcome = state.recognizer.start_listening().await;
    transition(&state, id, |s| Ok(s.apply_voice(outcome)?)).await
}

/// POST /api/v1/sessions/:id/submit
///
/// Accepts a valid draft and starts the recommendation fetch in the
/// background. Poll the session until `loading` is false.
pub async fn handle_submit(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (session, profile, generation) = state
        .sessions
        .update(id, |s| {
            s.submit()
                .map(|(profile, generation)| (s.clone(), profile, generation))
        })
        .await??;

    info!(session_id = %id, generation, sector = profile.sector.key(), "profile submitted");
    spawn_recommendation_fetch(
        state.sessions.clone(),
        state.recommender.clone(),
        id,
        profile,
        generation,
    );

    Ok((StatusCode::ACCEPTED, render(&state, &session).await))
}

/// POST /api/v1/sessions/:id/chat
///
/// Appends the user message now; the bot reply follows after the chat delay.
pub async fn handle_send_chat(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<SessionView>, AppError> {
    let (session, sent) = state
        .sessions
        .update(id, |s| {
            let sent = s.send_chat(&request.text);
            (s.clone(), sent)
        })
        .await?;

    if let Some(message) = sent {
        spawn_chat_reply(
            state.sessions.clone(),
            id,
            message.text,
            state.config.chat_delay,
        );
    }

    Ok(render(&state, &session).await)
}

/// PUT /api/v1/sessions/:id/locale
pub async fn handle_set_locale(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<LocaleRequest>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| {
        s.set_locale(request.locale);
        Ok(())
    })
    .await
}
