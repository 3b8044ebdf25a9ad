//! Chat-completions wire types and failure classification

use profiler_application::GatewayError;
use profiler_domain::ChatTurn;
use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatTurn],
}

/// Successful response body (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Error response body: `{"error": {"message", "type", "code"}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

const CONTEXT_OVERFLOW_MARKERS: [&str; 2] =
    ["maximum context length", "reduce the length of the messages"];

/// Map a non-success response to a [`GatewayError`].
///
/// Rate limits and context overflows get their own variants so the session
/// can recover from them. A 429 caused by an exhausted quota is not a rate
/// limit: waiting will not help.
pub fn classify_failure(status: u16, body: &str) -> GatewayError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error);
    let message = detail
        .as_ref()
        .map(|d| d.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    let code = detail
        .as_ref()
        .and_then(|d| d.code.as_deref().or(d.kind.as_deref()))
        .unwrap_or("");

    match status {
        429 if code == "insufficient_quota" => GatewayError::RequestFailed { status, message },
        429 => GatewayError::RateLimited(message),
        401 | 403 => GatewayError::Unauthorized(message),
        400 | 413
            if code == "context_length_exceeded"
                || CONTEXT_OVERFLOW_MARKERS.iter().any(|m| message.contains(m)) =>
        {
            GatewayError::ContextLengthExceeded(message)
        }
        _ => GatewayError::RequestFailed { status, message },
    }
}
