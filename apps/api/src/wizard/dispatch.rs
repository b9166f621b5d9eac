//! Background tasks around the session store: fire-and-forget work that
//! completes wizard actions after a delay, and the idle-session sweeper.
//! Deferred work is never cancelled if the session moves on before it fires.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat;
use crate::models::profile::Profile;
use crate::recommendation::Recommender;
use crate::wizard::store::SessionStore;

/// Runs the recommender and hands the outcome to the session for `generation`.
pub fn spawn_recommendation_fetch(
    sessions: Arc<SessionStore>,
    recommender: Arc<dyn Recommender>,
    session_id: Uuid,
    profile: Profile,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = recommender.recommend(&profile).await;
        match sessions
            .update(session_id, |s| s.finish_fetch(generation, outcome))
            .await
        {
            Ok(applied) => {
                debug!(%session_id, generation, applied, "recommendation fetch finished")
            }
            Err(e) => warn!(%session_id, "recommendation fetch outlived its session: {e}"),
        }
    })
}

/// Appends the canned reply for `text` after `delay`.
pub fn spawn_chat_reply(
    sessions: Arc<SessionStore>,
    session_id: Uuid,
    text: String,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let reply = chat::respond(&text);
        if let Err(e) = sessions
            .update(session_id, |s| s.push_bot_reply(reply))
            .await
        {
            warn!(%session_id, "chat reply outlived its session: {e}");
        }
    })
}

/// Evicts idle sessions once per ttl for as long as the runtime lives.
pub fn spawn_session_sweeper(sessions: Arc<SessionStore>) -> JoinHandle<()> {
    let period = sessions.ttl().max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let evicted = sessions.evict_idle().await;
            if evicted > 0 {
                info!(evicted, "evicted idle sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::DEFAULT_REPLY;
    use crate::errors::AppError;
    use crate::i18n::Locale;
    use crate::models::listing::ScoredListing;
    use crate::models::profile::{Education, Sector};
    use crate::profile::ProfileEdit;
    use crate::recommendation::CatalogRecommender;
    use crate::wizard::WizardError;
    use async_trait::async_trait;
    use tokio::time::Instant;

    struct FailingRecommender;

    #[async_trait]
    impl Recommender for FailingRecommender {
        async fn recommend(&self, _profile: &Profile) -> Result<Vec<ScoredListing>, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("catalog offline")))
        }
    }

    async fn submitted_session(store: &SessionStore) -> (Uuid, Profile, u64) {
        let session = store.create(Locale::En).await;
        let (profile, generation) = store
            .update(session.id, |s| -> Result<(Profile, u64), WizardError> {
                s.start()?;
                s.edit(ProfileEdit::Education(Education::Undergraduate))?;
                s.edit(ProfileEdit::ToggleSkill("AWS".into()))?;
                s.edit(ProfileEdit::Sector(Sector::Cloud))?;
                s.edit(ProfileEdit::RemoteOk(true))?;
                s.submit()
            })
            .await
            .unwrap()
            .unwrap();
        (session.id, profile, generation)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_fills_session_after_latency() {
        let store = Arc::new(SessionStore::new(Duration::from_secs(60)));
        let (id, profile, generation) = submitted_session(&store).await;
        let recommender: Arc<dyn Recommender> =
            Arc::new(CatalogRecommender::new(Duration::from_millis(1000)));

        let started = Instant::now();
        spawn_recommendation_fetch(store.clone(), recommender, id, profile, generation)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));

        let session = store.get(id).await.unwrap();
        assert!(!session.loading);
        assert_eq!(session.recommendations[0].listing.title, "Cloud Engineering Intern");
        assert_eq!(session.recommendations[0].score, 60);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_empty_results_silently() {
        let store = Arc::new(SessionStore::new(Duration::from_secs(60)));
        let (id, profile, generation) = submitted_session(&store).await;

        spawn_recommendation_fetch(
            store.clone(),
            Arc::new(FailingRecommender),
            id,
            profile,
            generation,
        )
        .await
        .unwrap();

        let session = store.get(id).await.unwrap();
        assert!(!session.loading);
        assert!(session.recommendations.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reply_arrives_after_delay() {
        let store = Arc::new(SessionStore::new(Duration::from_secs(60)));
        let session = store.create(Locale::En).await;
        store
            .update(session.id, |s| s.send_chat("banana"))
            .await
            .unwrap();

        let started = Instant::now();
        spawn_chat_reply(
            store.clone(),
            session.id,
            "banana".to_string(),
            Duration::from_millis(500),
        )
        .await
        .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));

        let session = store.get(session.id).await.unwrap();
        let chat = session.transcript().messages();
        assert_eq!(chat.len(), 3);
        assert!(chat[2].is_bot);
        assert_eq!(chat[2].text, DEFAULT_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_removes_idle_sessions() {
        let store = Arc::new(SessionStore::new(Duration::from_secs(60)));
        let session = store.create(Locale::En).await;
        let sweeper = spawn_session_sweeper(store.clone());

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(store.get(session.id).await.is_ok());

        // The next sweep lands at 120s, past the 60s ttl.
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(matches!(
            store.get(session.id).await,
            Err(AppError::NotFound(_))
        ));
        sweeper.abort();
    }
}
