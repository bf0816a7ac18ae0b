//! # Generative Model Trait
//!
//! [`GenerativeModel`] is the single seam between the reviewer and whichever
//! provider produces feedback text. Production uses
//! [`crate::feedback::gemini::GeminiModel`]; tests plug in deterministic stubs.

use crate::error::MentorError;
use async_trait::async_trait;

/// Turns a prompt into generated text.
///
/// # Returns
/// - `Ok(String)`: the generated text.
/// - `Err(MentorError)`: the provider could not be reached or gave nothing usable.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, MentorError>;

    /// Model identifier, used in logs.
    fn name(&self) -> &str;
}
