use mentor::Review;
use serde::Serialize;

/// Standardized envelope used by auxiliary endpoints such as `/health`.
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Body of a successful `POST /ai-feedback`.
///
/// ```json
/// {
///   "success": true,
///   "suspicion": "",
///   "feedback": "..."
/// }
/// ```
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FeedbackResponse {
    pub success: bool,
    pub suspicion: String,
    pub feedback: String,
}

impl From<Review> for FeedbackResponse {
    fn from(review: Review) -> Self {
        Self {
            success: true,
            suspicion: review.suspicion,
            feedback: review.feedback,
        }
    }
}

/// Body of every error response. `detail` is omitted when absent.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}
