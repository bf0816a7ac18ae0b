//! Mentor Error Types
//!
//! [`MentorError`] covers every way producing feedback can fail once a submission
//! has been accepted. Input validation problems are not represented here; they are
//! rejected before a [`crate::types::Submission`] can be constructed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MentorError {
    /// Transport-level failure talking to the model provider.
    #[error("request to model provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered, but not with something usable.
    #[error("{0}")]
    Upstream(String),

    /// The provider answered without any generated text (e.g. blocked prompt).
    #[error("model returned no text")]
    EmptyResponse,
}
