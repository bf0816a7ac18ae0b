//! # Reviewer
//!
//! Produces a [`Review`] for one [`Submission`]:
//!
//! 1. measure the code and the time since `submittedAt`,
//! 2. apply the [`SuspicionPolicy`],
//! 3. ask the configured [`GenerativeModel`] for feedback, or fall back to
//!    [`DEFAULT_FEEDBACK`] when no model is configured.
//!
//! Model failures are returned as errors; they never degrade to the default text.

use crate::error::MentorError;
use crate::feedback::gemini::GeminiModel;
use crate::prompt::{DEFAULT_FEEDBACK, mentoring_prompt};
use crate::suspicion::{SuspicionPolicy, elapsed_seconds};
use crate::traits::model::GenerativeModel;
use crate::types::{FeedbackSource, Review, Submission};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};
use util::config::AppConfig;

#[derive(Clone)]
pub struct Reviewer {
    policy: SuspicionPolicy,
    model: Option<Arc<dyn GenerativeModel>>,
}

impl Reviewer {
    pub fn new(policy: SuspicionPolicy, model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { policy, model }
    }

    /// Uses Gemini when a credential is configured, otherwise the default feedback.
    pub fn from_config(config: &AppConfig) -> Self {
        let model = GeminiModel::from_config(config)
            .map(|gemini| Arc::new(gemini) as Arc<dyn GenerativeModel>);
        if model.is_none() {
            info!("GEMINI_API_KEY not set, serving default feedback");
        }
        Self::new(SuspicionPolicy::from_config(config), model)
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub async fn review(
        &self,
        submission: &Submission,
        now: DateTime<Utc>,
    ) -> Result<Review, MentorError> {
        let code_length = submission.code_length();
        let elapsed = elapsed_seconds(submission.submitted_at(), now);
        let suspicion = self.policy.evaluate(elapsed, code_length);

        if suspicion.flagged {
            info!(elapsed_secs = elapsed, code_length, "Submission flagged as possible paste");
        }

        let (feedback, source) = match &self.model {
            Some(model) => {
                debug!(model = model.name(), code_length, "Requesting model feedback");
                let text = model.generate(&mentoring_prompt(submission.code())).await?;
                (text, FeedbackSource::Model)
            }
            None => (DEFAULT_FEEDBACK.to_string(), FeedbackSource::Default),
        };

        Ok(Review {
            suspicion: suspicion.message(),
            feedback,
            source,
        })
    }
}
