//! Conversation sessions
//!
//! A [`ConversationSession`] holds one ordered message log and performs one
//! chat round-trip at a time, recovering from rate limits and context
//! overflows as decided in [`retry`].

pub mod factory;
pub mod retry;
pub mod session;

pub use factory::SessionFactory;
pub use retry::{AttemptOutcome, RetryAction};
pub use session::{ConversationError, ConversationSession};
