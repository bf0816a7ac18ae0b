//! # Mentor Library
//!
//! Core logic behind the code-mentor feedback endpoint: validates a student's
//! submission, runs the paste-speed suspicion heuristic, and asks a generative
//! model for short mentoring feedback, falling back to a fixed coaching message
//! when no model is configured.
//!
//! ## Key Concepts
//! - **Submission**: a validated piece of student code plus an optional "started at" timestamp.
//! - **SuspicionPolicy**: timing/length thresholds that flag a likely copy-paste.
//! - **GenerativeModel**: the injected capability that turns a prompt into text.
//! - **Reviewer**: ties the pieces together and produces a [`types::Review`].

pub mod error;
pub mod feedback;
pub mod prompt;
pub mod review;
pub mod suspicion;
pub mod traits;
pub mod types;

pub use error::MentorError;
pub use review::Reviewer;
pub use types::{FeedbackSource, Review, Submission};
