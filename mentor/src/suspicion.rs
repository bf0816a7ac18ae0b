//! # Suspicion Heuristic
//!
//! A crude guess that code was pasted rather than typed: a lot of code submitted
//! very soon after the exercise was opened. This is a hint for a human reviewer,
//! not a plagiarism detector.
//!
//! The thresholds live in [`SuspicionPolicy`] and default to:
//! - fewer than 5 seconds and more than 200 characters, or
//! - fewer than 20 seconds and more than 600 characters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use util::config::AppConfig;

/// One timing/length threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuspicionRule {
    /// Fires only when the elapsed time is strictly below this.
    pub max_elapsed_secs: u64,
    /// Fires only when the code is strictly longer than this.
    pub min_code_length: usize,
}

impl SuspicionRule {
    pub fn matches(&self, elapsed_secs: u64, code_length: usize) -> bool {
        elapsed_secs < self.max_elapsed_secs && code_length > self.min_code_length
    }
}

/// A submission is flagged when any rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspicionPolicy {
    rules: Vec<SuspicionRule>,
}

impl Default for SuspicionPolicy {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SuspicionPolicy {
    pub fn new(rules: Vec<SuspicionRule>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(vec![
            SuspicionRule {
                max_elapsed_secs: config.suspicion_fast_secs,
                min_code_length: config.suspicion_fast_chars,
            },
            SuspicionRule {
                max_elapsed_secs: config.suspicion_slow_secs,
                min_code_length: config.suspicion_slow_chars,
            },
        ])
    }

    pub fn rules(&self) -> &[SuspicionRule] {
        &self.rules
    }

    pub fn evaluate(&self, elapsed_secs: u64, code_length: usize) -> Suspicion {
        Suspicion {
            elapsed_secs,
            code_length,
            flagged: self
                .rules
                .iter()
                .any(|rule| rule.matches(elapsed_secs, code_length)),
        }
    }
}

/// Result of applying a [`SuspicionPolicy`] to one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspicion {
    pub elapsed_secs: u64,
    pub code_length: usize,
    pub flagged: bool,
}

impl Suspicion {
    /// Human-readable warning, or an empty string when not flagged.
    pub fn message(&self) -> String {
        if self.flagged {
            format!(
                "⚠️ 제출 {}s / {}자 → 복붙 의심",
                self.elapsed_secs, self.code_length
            )
        } else {
            String::new()
        }
    }
}

/// Whole seconds between `submitted_at` and `now`, floored and never negative.
///
/// Absent or unparseable timestamps count as zero elapsed seconds.
pub fn elapsed_seconds(submitted_at: Option<&str>, now: DateTime<Utc>) -> u64 {
    let Some(raw) = submitted_at else {
        return 0;
    };

    match parse_timestamp(raw) {
        Some(started) => (now - started).num_seconds().max(0) as u64,
        None => {
            tracing::warn!(submitted_at = %raw, "Unparseable submittedAt, treating as absent");
            0
        }
    }
}

/// Parses the timestamp shapes browsers commonly send.
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
