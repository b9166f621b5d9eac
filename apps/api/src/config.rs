use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_APPLY_URL: &str = "https://pminternship.gov.in";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub prefs_path: PathBuf,
    pub recommend_delay: Duration,
    pub chat_delay: Duration,
    pub apply_url: String,
    /// Sessions idle for longer than this are evicted.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            prefs_path: PathBuf::from(".pm-intern/preferences.json"),
            recommend_delay: Duration::from_millis(1000),
            chat_delay: Duration::from_millis(500),
            apply_url: DEFAULT_APPLY_URL.to_string(),
            session_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            prefs_path: lookup("PREFS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.prefs_path),
            recommend_delay: millis(&lookup, "RECOMMEND_DELAY_MS")?
                .unwrap_or(defaults.recommend_delay),
            chat_delay: millis(&lookup, "CHAT_DELAY_MS")?.unwrap_or(defaults.chat_delay),
            apply_url: lookup("APPLY_URL").unwrap_or(defaults.apply_url),
            session_ttl: secs(&lookup, "SESSION_TTL_SECS")?.unwrap_or(defaults.session_ttl),
        })
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("{key} must be a whole number of milliseconds"))
        })
        .transpose()
}

fn secs(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{key} must be a whole number of seconds"))
        })
        .transpose()
}
