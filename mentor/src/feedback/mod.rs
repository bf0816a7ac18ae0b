//! # Feedback Providers
//!
//! Implementations of [`crate::traits::model::GenerativeModel`].
//!
//! - [`gemini`]: Google's Gemini `generateContent` REST API.

pub mod gemini;
