//! LLM Gateway port
//!
//! Defines the interface for communicating with chat-completion providers.

use async_trait::async_trait;
use profiler_domain::{ChatTurn, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// Two variants drive recovery in
/// [`ConversationSession`](crate::conversation::ConversationSession):
/// [`RateLimited`](GatewayError::RateLimited) waits and retries,
/// [`ContextLengthExceeded`](GatewayError::ContextLengthExceeded) evicts the
/// oldest message and retries. Everything else is surfaced immediately.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Context length exceeded: {0}")]
    ContextLengthExceeded(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request failed (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    pub fn is_context_length_exceeded(&self) -> bool {
        matches!(self, GatewayError::ContextLengthExceeded(_))
    }
}

/// Gateway for chat completions
///
/// Stateless: every call carries the full turn list. Conversation state lives
/// in the caller's session.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `turns` to `model` and return the reply text
    async fn complete(&self, model: &Model, turns: &[ChatTurn]) -> Result<String, GatewayError>;
}
