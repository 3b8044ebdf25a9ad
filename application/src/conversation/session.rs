//! Conversation session: ordered history plus one-request-at-a-time replies.

use super::retry::{AttemptOutcome, RetryAction, evaluate_attempt};
use crate::config::RetryPolicy;
use crate::ports::artifact_store::StoreError;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::session_store::SessionStore;
use profiler_domain::util::truncate_str;
use profiler_domain::{Actor, KeywordInserts, Model, SessionState};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by [`ConversationSession::request_reply`]
#[derive(Error, Debug)]
pub enum ConversationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Failed to save session: {0}")]
    Persist(#[from] StoreError),
}

struct Backing {
    store: Arc<dyn SessionStore>,
    name: String,
}

/// One logical conversation with a model
///
/// Owns its [`SessionState`] exclusively. History is append-only: context
/// pressure only clears `sendable` flags, see [`super::retry`].
pub struct ConversationSession {
    gateway: Arc<dyn LlmGateway>,
    state: SessionState,
    inserts: KeywordInserts,
    retry: RetryPolicy,
    backing: Option<Backing>,
}

impl ConversationSession {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        instructions: impl Into<String>,
        model: Model,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            gateway,
            state: SessionState::new(instructions, model),
            inserts: KeywordInserts::new(),
            retry,
            backing: None,
        }
    }

    /// Configure keyword-triggered insertions applied on [`append`](Self::append)
    pub fn with_inserts(mut self, inserts: KeywordInserts) -> Self {
        self.inserts = inserts;
        self
    }

    /// Back the session with `name` in `store`, resuming any saved history.
    ///
    /// A saved state replaces the instructions and model given to
    /// [`new`](Self::new). Without one the session starts fresh and the
    /// first save creates it.
    pub fn resume_from(mut self, store: Arc<dyn SessionStore>, name: impl Into<String>) -> Self {
        let name = name.into();
        match store.load(&name) {
            Some(state) => {
                info!(
                    "Resumed session '{}' with {} messages",
                    name,
                    state.messages.len()
                );
                self.state = state;
            }
            None => debug!("No prior history for session '{}'", name),
        }
        self.backing = Some(Backing { store, name });
        self
    }

    /// Back the session with `name` in `store` without loading it.
    ///
    /// The first save overwrites whatever was stored under `name`.
    pub fn record_to(mut self, store: Arc<dyn SessionStore>, name: impl Into<String>) -> Self {
        self.backing = Some(Backing {
            store,
            name: name.into(),
        });
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn model(&self) -> &Model {
        &self.state.model
    }

    /// Store `text` as a sendable message, with any matching inserts appended
    pub fn append(&mut self, text: &str, actor: Actor) {
        let text = self.inserts.apply(text);
        self.state.push(actor, text);
    }

    /// Request a reply using the session's default retry budget
    pub async fn request_reply(
        &mut self,
        text: Option<&str>,
        persist: bool,
    ) -> Result<String, ConversationError> {
        let max_retries = self.retry.max_retries;
        self.request_reply_with_retries(text, persist, max_retries)
            .await
    }

    /// Send the sendable history, plus `text` as a final user turn, and
    /// return the reply.
    ///
    /// Rate limits and context overflows are retried at most `max_retries`
    /// times. With `persist`, `text` and the reply are appended to the
    /// history and the session is saved to its backing store.
    pub async fn request_reply_with_retries(
        &mut self,
        text: Option<&str>,
        persist: bool,
        max_retries: usize,
    ) -> Result<String, ConversationError> {
        let mut retries_left = max_retries;

        let reply = loop {
            let turns = self.state.outbound_turns(text);
            debug!(
                "Requesting reply from {} with {} turns",
                self.state.model,
                turns.len()
            );
            let result = self.gateway.complete(&self.state.model, &turns).await;

            match evaluate_attempt(result, retries_left, &self.retry, &mut self.state) {
                AttemptOutcome::Success(reply) => break reply,
                AttemptOutcome::Retry(RetryAction::Cooldown(wait)) => {
                    warn!(
                        "Rate limited, retrying in {:?} ({} retries left)",
                        wait, retries_left
                    );
                    tokio::time::sleep(wait).await;
                }
                AttemptOutcome::Retry(RetryAction::Evicted { index }) => {
                    warn!(
                        "Context length exceeded, dropped message {} from requests ({} retries left)",
                        index, retries_left
                    );
                }
                AttemptOutcome::Failed(error) => return Err(error.into()),
            }
            retries_left -= 1;
        };

        debug!("Reply: {}", truncate_str(&reply, 120));

        if persist {
            if let Some(text) = text {
                self.state.push(Actor::User, text);
            }
            self.state.push(Actor::Assistant, reply.clone());
            self.save()?;
        }

        Ok(reply)
    }

    /// Write the full state to the backing store, if any
    pub fn save(&self) -> Result<(), StoreError> {
        match &self.backing {
            Some(backing) => backing.store.save(&backing.name, &self.state),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemorySessionStore, ScriptedGateway};
    use profiler_domain::{ChatTurn, Role};

    fn session(gateway: Arc<ScriptedGateway>) -> ConversationSession {
        ConversationSession::new(
            gateway,
            "be a profiler",
            Model::Gpt35Turbo16k,
            RetryPolicy::immediate(3),
        )
    }

    #[test]
    fn test_append_applies_inserts() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let mut session =
            session(gateway).with_inserts(KeywordInserts::new().with("profile", "Use bullets."));

        session.append("build a profile", Actor::User);
        session.append("hello", Actor::User);

        let messages = &session.state().messages;
        assert_eq!(messages[0].message, "build a profile\n\nUse bullets.");
        assert_eq!(messages[1].message, "hello");
        assert!(messages.iter().all(|m| m.sendable));
    }

    #[tokio::test]
    async fn test_request_reply_persists_turns() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok("reply".to_string())]));
        let mut session = session(gateway.clone());
        session.append("context", Actor::User);

        let reply = session.request_reply(Some("question"), true).await.unwrap();

        assert_eq!(reply, "reply");
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].1,
            vec![
                ChatTurn::system("be a profiler"),
                ChatTurn::user("context"),
                ChatTurn::user("question"),
            ]
        );
        let messages = &session.state().messages;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].message, "question");
        assert_eq!(messages[2].actor, Actor::Assistant);
    }

    #[tokio::test]
    async fn test_request_reply_without_persist_leaves_history() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok("reply".to_string())]));
        let mut session = session(gateway);
        session.append("context", Actor::User);

        session.request_reply(Some("question"), false).await.unwrap();

        assert_eq!(session.state().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_context_overflow_evicts_one_message_per_retry() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::ContextLengthExceeded("too long".into())),
            Err(GatewayError::ContextLengthExceeded("too long".into())),
            Ok("fits now".to_string()),
        ]));
        let mut session = session(gateway.clone());
        session.append("pinned", Actor::Background);
        session.append("oldest", Actor::User);
        session.append("older", Actor::Assistant);
        session.append("newest", Actor::User);

        let reply = session.request_reply(None, true).await.unwrap();
        assert_eq!(reply, "fits now");

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        // system + 4, then 3, then 2 sendable messages
        assert_eq!(calls[0].1.len(), 5);
        assert_eq!(calls[1].1.len(), 4);
        assert_eq!(calls[2].1.len(), 3);
        assert_eq!(calls[2].1[1], ChatTurn::user("pinned"));
        assert_eq!(calls[2].1[2].role, Role::User);
        assert_eq!(calls[2].1[2].content, "newest");

        let messages = &session.state().messages;
        assert_eq!(messages.len(), 5);
        assert!(messages[0].sendable);
        assert!(!messages[1].sendable);
        assert!(!messages[2].sendable);
        assert!(messages[3].sendable);
        assert!(messages[4].sendable);
    }

    #[tokio::test]
    async fn test_retries_exhausted_surfaces_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::RateLimited("1".into())),
            Err(GatewayError::RateLimited("2".into())),
            Err(GatewayError::RateLimited("3".into())),
        ]));
        let mut session = session(gateway.clone());

        let result = session
            .request_reply_with_retries(Some("hi"), true, 2)
            .await;

        assert!(matches!(
            result,
            Err(ConversationError::Gateway(GatewayError::RateLimited(m))) if m == "3"
        ));
        assert_eq!(gateway.calls().len(), 3);
        assert!(session.state().messages.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_waits_cooldown() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::RateLimited("slow".into())),
            Ok("ok".to_string()),
        ]));
        let policy = RetryPolicy {
            max_retries: 1,
            rate_limit_cooldown: std::time::Duration::from_secs(20),
        };
        let mut session =
            ConversationSession::new(gateway.clone(), "sys", Model::Gpt35Turbo16k, policy);

        let start = tokio::time::Instant::now();
        let reply = session.request_reply(Some("hi"), false).await.unwrap();

        assert_eq!(reply, "ok");
        assert!(start.elapsed() >= std::time::Duration::from_secs(20));
    }

    #[tokio::test]
    async fn test_unrecoverable_error_is_not_retried() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::Unauthorized("bad key".into())),
            Ok("never".to_string()),
        ]));
        let mut session = session(gateway.clone());

        let result = session.request_reply(Some("hi"), true).await;

        assert!(matches!(
            result,
            Err(ConversationError::Gateway(GatewayError::Unauthorized(_)))
        ));
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_backing_store_saved_and_resumed() {
        let store = Arc::new(MemorySessionStore::default());
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]));

        let mut session = session(gateway.clone()).resume_from(store.clone(), "alice");
        session.request_reply(Some("one"), true).await.unwrap();
        let saved = store.get("alice").unwrap();
        assert_eq!(saved.messages.len(), 2);

        let mut resumed = ConversationSession::new(
            gateway.clone(),
            "ignored",
            Model::Gpt4o,
            RetryPolicy::immediate(0),
        )
        .resume_from(store.clone(), "alice");
        assert_eq!(resumed.state(), &saved);

        resumed.request_reply(Some("two"), true).await.unwrap();
        let calls = gateway.calls();
        assert_eq!(calls[1].0, Model::Gpt35Turbo16k);
        assert_eq!(calls[1].1.len(), 4);
        assert_eq!(store.get("alice").unwrap().messages.len(), 4);
    }

    #[tokio::test]
    async fn test_record_to_ignores_previous_state() {
        let store = Arc::new(MemorySessionStore::default());
        let mut old = SessionState::new("old", Model::Gpt4o);
        old.push(Actor::User, "stale");
        store.save("bob-chunk-001", &old).unwrap();

        let gateway = Arc::new(ScriptedGateway::new(vec![Ok("fresh".to_string())]));
        let mut session = session(gateway).record_to(store.clone(), "bob-chunk-001");
        assert!(session.state().messages.is_empty());

        session.request_reply(Some("q"), true).await.unwrap();
        let saved = store.get("bob-chunk-001").unwrap();
        assert_eq!(saved.instructions, "be a profiler");
        assert_eq!(saved.messages.len(), 2);
    }
}
