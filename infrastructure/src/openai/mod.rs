//! OpenAI adapter
//!
//! Implements [`LlmGateway`](profiler_application::LlmGateway) over the
//! chat-completions endpoint. Each call is one stateless request; failures
//! are classified so the conversation session can recover from rate limits
//! and context overflows.

pub mod gateway;
pub mod protocol;

pub use gateway::{DEFAULT_BASE_URL, OpenAiGateway};
pub use protocol::classify_failure;
