//! Persisted UI preferences. Only the dark-mode flag is stored.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub mod handlers;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Preference write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Backing storage for `Preferences`. Calls may block; async callers run
/// them on the blocking pool.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Preferences, PreferenceError>;
    fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError>;
}

/// JSON file store. A missing file reads as defaults.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Preferences, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(prefs)?)?;
        debug!(path = %self.path.display(), dark_mode = prefs.dark_mode, "preferences saved");
        Ok(())
    }
}

/// Cached preferences plus the store they are written through to.
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
    current: Mutex<Preferences>,
}

impl PreferenceService {
    /// Reads the persisted flag once; later reads come from the cache.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Result<Self, PreferenceError> {
        let current = store.load()?;
        info!(dark_mode = current.dark_mode, "preferences loaded");
        Ok(Self {
            store,
            current: Mutex::new(current),
        })
    }

    pub async fn get(&self) -> Preferences {
        *self.current.lock().await
    }

    /// Flips dark mode and persists the new value before returning it.
    /// The lock is held across the write so toggles land in order.
    pub async fn toggle_dark_mode(&self) -> Result<Preferences, PreferenceError> {
        let mut current = self.current.lock().await;
        let next = Preferences {
            dark_mode: !current.dark_mode,
        };
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.save(&next)).await??;
        *current = next;
        Ok(next)
    }
}
