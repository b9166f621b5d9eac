use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::wizard::session::Session;

struct Entry {
    session: Session,
    last_active: Instant,
}

/// In-memory sessions keyed by id. Locks are never held across a timer.
///
/// A session untouched by `create` or `update` for longer than `ttl` is
/// dropped by the next `evict_idle` sweep.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn create(&self, locale: Locale) -> Session {
        let session = Session::new(locale);
        self.sessions.write().await.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_active: Instant::now(),
            },
        );
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|entry| entry.session.clone())
            .ok_or_else(|| session_not_found(id))
    }

    /// Runs `f` against the session under the write lock and marks it active.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        entry.last_active = Instant::now();
        Ok(f(&mut entry.session))
    }

    /// Drops every session idle for longer than the ttl. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) <= self.ttl);
        before - sessions.len()
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
