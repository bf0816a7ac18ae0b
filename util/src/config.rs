//! Application configuration.
//!
//! `AppConfig` is loaded once at startup from `.env` and the process environment
//! and then handed to the router by value. Nothing reads the environment after
//! startup, so handlers and tests can be given any configuration they like.

use std::env;
use std::str::FromStr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Represents the complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    /// Model-provider credential. Empty means "not configured".
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub suspicion_fast_secs: u64,
    pub suspicion_fast_chars: usize,
    pub suspicion_slow_secs: u64,
    pub suspicion_slow_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".into(),
            project_name: "code-mentor".into(),
            log_level: "api=info,mentor=info".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            host: "127.0.0.1".into(),
            port: 3000,
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.into(),
            suspicion_fast_secs: 5,
            suspicion_fast_chars: 200,
            suspicion_slow_secs: 20,
            suspicion_slow_chars: 600,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their default. Numeric keys that fail to parse also keep
    /// their default and emit a warning rather than aborting startup.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        Self {
            env: text("APP_ENV", defaults.env),
            project_name: text("PROJECT_NAME", defaults.project_name),
            log_level: text("LOG_LEVEL", defaults.log_level),
            log_file: text("LOG_FILE", defaults.log_file),
            log_to_stdout: lookup("LOG_TO_STDOUT")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.log_to_stdout),
            host: text("HOST", defaults.host),
            port: parsed(&lookup, "PORT", defaults.port),
            gemini_api_key: lookup("GEMINI_API_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            gemini_model: text("GEMINI_MODEL", defaults.gemini_model),
            gemini_base_url: text("GEMINI_BASE_URL", defaults.gemini_base_url),
            suspicion_fast_secs: parsed(&lookup, "SUSPICION_FAST_SECS", defaults.suspicion_fast_secs),
            suspicion_fast_chars: parsed(
                &lookup,
                "SUSPICION_FAST_CHARS",
                defaults.suspicion_fast_chars,
            ),
            suspicion_slow_secs: parsed(&lookup, "SUSPICION_SLOW_SECS", defaults.suspicion_slow_secs),
            suspicion_slow_chars: parsed(
                &lookup,
                "SUSPICION_SLOW_CHARS",
                defaults.suspicion_slow_chars,
            ),
        }
    }

    /// True when a model-provider credential is present.
    pub fn has_gemini_credential(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }

    pub fn with_gemini_api_key(mut self, value: impl Into<String>) -> Self {
        self.gemini_api_key = value.into();
        self
    }
}

fn parsed<F, T>(lookup: &F, key: &str, fallback: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %fallback, "Invalid config value, using default");
            fallback
        }),
        None => fallback,
    }
}
