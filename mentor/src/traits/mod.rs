//! Traits Module
//!
//! - [`model`]: the generative-model capability the reviewer depends on.

pub mod model;
