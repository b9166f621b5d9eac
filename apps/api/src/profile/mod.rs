// Profile collection: draft edits, the submit predicate, voice capture.

pub mod collector;
pub mod voice;

pub use collector::{ProfileDraft, ProfileEdit, ProfileError};
pub use voice::{SpeechRecognizer, VoiceError};
