use crate::error::ApiError;
use crate::response::FeedbackResponse;
use crate::state::AppState;
use axum::{Json, body::Bytes, extract::State};
use chrono::{DateTime, SecondsFormat, Utc};
use mentor::{FeedbackSource, Submission};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Raw request body. Fields are kept as loose JSON so that a wrong type
/// (e.g. `"code": 123`) is reported as "No code submitted" rather than a
/// deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub submitted_at: Option<Value>,
}

impl SubmissionRequest {
    /// Parses a request body. Anything that is not a JSON object yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Validates the request. Returns `None` when `code` is missing, empty, or not a string.
    ///
    /// A numeric `submittedAt` is read as milliseconds since the Unix epoch
    /// (what `Date.now()` produces). Any other non-string value is ignored.
    pub fn into_submission(self) -> Option<Submission> {
        let Some(Value::String(code)) = self.code else {
            return None;
        };
        let submitted_at = match self.submitted_at {
            Some(Value::String(raw)) => Some(raw),
            Some(Value::Number(millis)) => millis
                .as_i64()
                .or_else(|| millis.as_f64().map(|f| f.trunc() as i64))
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            _ => None,
        };
        Submission::new(code, submitted_at)
    }
}

/// POST /ai-feedback
///
/// Reviews a code submission and returns mentoring feedback plus a paste-speed warning.
///
/// ### Request Body
/// ```json
/// {
///   "code": "def add(a, b):\n    return a + b",
///   "submittedAt": "2025-05-23T10:59:58.000Z"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "suspicion": "⚠️ 제출 2s / 250자 → 복붙 의심",
///   "feedback": "..."
/// }
/// ```
///
/// - `400 Bad Request` (missing, empty, or non-string `code`)
/// ```json
/// { "error": "No code submitted" }
/// ```
///
/// - `500 Internal Server Error` (model provider failure)
/// ```json
/// { "error": "INTERNAL", "detail": "request to model provider failed: ..." }
/// ```
pub async fn submit_feedback(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let submission = SubmissionRequest::from_body(&body)
        .into_submission()
        .ok_or(ApiError::InvalidInput)?;

    let review = app_state
        .reviewer()
        .review(&submission, Utc::now())
        .await?;

    info!(
        code_length = submission.code_length(),
        suspicious = !review.suspicion.is_empty(),
        from_model = review.source == FeedbackSource::Model,
        "Feedback generated"
    );

    Ok(Json(FeedbackResponse::from(review)))
}
