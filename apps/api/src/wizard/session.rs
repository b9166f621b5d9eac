//! Per-user wizard state and its transitions. Every transition is a plain
//! method on `Session`; async work lives in `dispatch`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::models::chat::{ChatMessage, Transcript};
use crate::models::listing::ScoredListing;
use crate::models::profile::Profile;
use crate::profile::{ProfileDraft, ProfileEdit, ProfileError, VoiceError};

const FORM_STEPS: u8 = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Landing,
    Form,
    Recommendations,
}

impl Step {
    /// Position in the "Step N of 2" indicator; the landing page has none.
    pub fn number(&self) -> Option<u8> {
        match self {
            Step::Landing => None,
            Step::Form => Some(1),
            Step::Recommendations => Some(2),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Action requires step {expected:?}, session is on {actual:?}")]
    WrongStep { expected: Step, actual: Step },

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub step: Step,
    pub locale: Locale,
    pub draft: ProfileDraft,
    pub profile: Option<Profile>,
    pub recommendations: Vec<ScoredListing>,
    pub loading: bool,
    fetch_generation: u64,
    transcript: Transcript,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            step: Step::Landing,
            locale,
            draft: ProfileDraft::default(),
            profile: None,
            recommendations: Vec::new(),
            loading: false,
            fetch_generation: 0,
            transcript: Transcript::with_greeting(locale.bundle().need_help),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn expect_step(&self, expected: Step) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    pub fn start(&mut self) -> Result<(), WizardError> {
        self.expect_step(Step::Landing)?;
        self.step = Step::Form;
        self.touch();
        Ok(())
    }

    /// Recommendations → form → landing. The draft is kept.
    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Recommendations => Step::Form,
            Step::Form | Step::Landing => Step::Landing,
        };
        self.touch();
    }

    pub fn edit(&mut self, edit: ProfileEdit) -> Result<(), WizardError> {
        self.expect_step(Step::Form)?;
        self.draft.apply(edit);
        self.touch();
        Ok(())
    }

    /// A final transcript fills the location; a failed capture changes nothing.
    pub fn apply_voice(&mut self, outcome: Result<String, VoiceError>) -> Result<(), WizardError> {
        self.expect_step(Step::Form)?;
        match outcome {
            Ok(transcript) => {
                self.draft.apply(ProfileEdit::Location(transcript));
                self.touch();
            }
            Err(e) => debug!(session_id = %self.id, "voice capture ended without transcript: {e}"),
        }
        Ok(())
    }

    /// Freezes the draft into a profile and opens a new fetch generation.
    /// An invalid draft leaves the session untouched.
    pub fn submit(&mut self) -> Result<(Profile, u64), WizardError> {
        self.expect_step(Step::Form)?;
        let profile = self.draft.submit()?;

        self.fetch_generation += 1;
        self.profile = Some(profile.clone());
        self.recommendations.clear();
        self.loading = true;
        self.step = Step::Recommendations;
        self.touch();
        Ok((profile, self.fetch_generation))
    }

    /// Applies a fetch outcome. Failures end loading with an empty list and
    /// are never surfaced. Returns false when a newer submit superseded it.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        outcome: Result<Vec<ScoredListing>, AppError>,
    ) -> bool {
        if generation != self.fetch_generation {
            debug!(
                session_id = %self.id,
                generation,
                current = self.fetch_generation,
                "discarding stale recommendations"
            );
            return false;
        }

        self.recommendations = match outcome {
            Ok(results) => results,
            Err(e) => {
                warn!(session_id = %self.id, "recommendation fetch failed: {e}");
                Vec::new()
            }
        };
        self.loading = false;
        self.touch();
        true
    }

    /// Records a user message. Blank input is ignored and yields `None`.
    pub fn send_chat(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        let message = self.transcript.push(text.to_string(), false).clone();
        self.touch();
        Some(message)
    }

    pub fn push_bot_reply(&mut self, reply: &str) -> ChatMessage {
        let message = self.transcript.push(reply.to_string(), true).clone();
        self.touch();
        message
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.touch();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn view(&self, dark_mode: bool) -> SessionView {
        SessionView {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            step: self.step,
            step_label: self
                .step
                .number()
                .map(|n| self.locale.bundle().step_label(n, FORM_STEPS)),
            locale: self.locale,
            dark_mode,
            draft: self.draft.clone(),
            can_submit: self.draft.is_valid(),
            profile: self.profile.clone(),
            loading: self.loading,
            recommendations: self.recommendations.clone(),
            chat: self.transcript().messages().to_vec(),
        }
    }
}

/// Client-facing snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub step: Step,
    pub step_label: Option<String>,
    pub locale: Locale,
    pub dark_mode: bool,
    pub draft: ProfileDraft,
    pub can_submit: bool,
    pub profile: Option<Profile>,
    pub loading: bool,
    pub recommendations: Vec<ScoredListing>,
    pub chat: Vec<ChatMessage>,
}
