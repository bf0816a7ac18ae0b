//! Application state shared across Axum route handlers.
//!
//! Everything in here is read-only after startup, so cloning `AppState` per
//! request is just a couple of `Arc` bumps.

use mentor::Reviewer;
use std::sync::Arc;
use util::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    reviewer: Arc<Reviewer>,
}

impl AppState {
    pub fn new(config: AppConfig, reviewer: Reviewer) -> Self {
        Self {
            config: Arc::new(config),
            reviewer: Arc::new(reviewer),
        }
    }

    /// Builds the state from configuration alone, wiring Gemini in when a
    /// credential is present.
    pub fn from_config(config: AppConfig) -> Self {
        let reviewer = Reviewer::from_config(&config);
        Self::new(config, reviewer)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn reviewer(&self) -> &Reviewer {
        &self.reviewer
    }
}
