//! Speech capture for the location field. Headless deployments have no
//! microphone, so the default recognizer always reports `Unavailable`.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Speech recognition is not available")]
    Unavailable,

    /// Raised by capture backends; the headless build ships none.
    #[allow(dead_code)]
    #[error("Speech recognition failed: {0}")]
    Recognition(String),
}

/// Listens once and yields the final transcript.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn start_listening(&self) -> Result<String, VoiceError>;
}

pub struct UnavailableRecognizer;

#[async_trait]
impl SpeechRecognizer for UnavailableRecognizer {
    async fn start_listening(&self) -> Result<String, VoiceError> {
        Err(VoiceError::Unavailable)
    }
}

/// Replays queued outcomes in order; reports `Unavailable` once drained.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedRecognizer {
    outcomes: std::sync::Mutex<Vec<Result<String, VoiceError>>>,
}

#[cfg(test)]
impl ScriptedRecognizer {
    pub fn new(outcomes: Vec<Result<String, VoiceError>>) -> Self {
        let mut outcomes = outcomes;
        outcomes.reverse();
        Self {
            outcomes: std::sync::Mutex::new(outcomes),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn start_listening(&self) -> Result<String, VoiceError> {
        let mut outcomes = self
            .outcomes
            .lock()
            .map_err(|_| VoiceError::Recognition("recognizer state poisoned".to_string()))?;
        outcomes.pop().unwrap_or(Err(VoiceError::Unavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_recognizer_replays_in_order() {
        let recognizer = ScriptedRecognizer::new(vec![
            Ok("Mumbai".to_string()),
            Err(VoiceError::Recognition("no-speech".to_string())),
        ]);

        assert_eq!(recognizer.start_listening().await, Ok("Mumbai".to_string()));
        assert!(matches!(
            recognizer.start_listening().await,
            Err(VoiceError::Recognition(_))
        ));
        assert_eq!(
            recognizer.start_listening().await,
            Err(VoiceError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_default_recognizer_is_unavailable() {
        assert_eq!(
            UnavailableRecognizer.start_listening().await,
            Err(VoiceError::Unavailable)
        );
    }
}
