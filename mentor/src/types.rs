//! # Types Module
//!
//! Data structures passed between the HTTP layer and the reviewer.

/// A validated code submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The student's source code, verbatim. Never empty.
    code: String,
    /// Raw `submittedAt` value as sent by the client.
    submitted_at: Option<String>,
}

impl Submission {
    /// Returns `None` when `code` is empty, mirroring the "No code submitted" rule.
    pub fn new(code: impl Into<String>, submitted_at: Option<String>) -> Option<Self> {
        let code = code.into();
        if code.is_empty() {
            return None;
        }
        Some(Self { code, submitted_at })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn submitted_at(&self) -> Option<&str> {
        self.submitted_at.as_deref()
    }

    /// Length of the code in characters (Unicode scalar values, not bytes).
    pub fn code_length(&self) -> usize {
        self.code.chars().count()
    }
}

/// Where the feedback text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSource {
    Default,
    Model,
}

/// Outcome of reviewing one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Warning string, empty when the submission is not suspicious.
    pub suspicion: String,
    pub feedback: String,
    pub source: FeedbackSource,
}
