//! Session factory shared by the pipeline use cases.

use super::session::ConversationSession;
use crate::config::RetryPolicy;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::session_store::SessionStore;
use profiler_domain::Model;
use std::sync::Arc;

/// Opens fresh [`ConversationSession`]s with a shared gateway and retry policy
///
/// With a recorder configured, every session is saved under
/// `<prefix>-<label>` so a run can be inspected afterwards.
#[derive(Clone)]
pub struct SessionFactory {
    gateway: Arc<dyn LlmGateway>,
    retry: RetryPolicy,
    recorder: Option<(Arc<dyn SessionStore>, String)>,
}

impl SessionFactory {
    pub fn new(gateway: Arc<dyn LlmGateway>, retry: RetryPolicy) -> Self {
        Self {
            gateway,
            retry,
            recorder: None,
        }
    }

    /// Record every opened session to `store` under `<prefix>-<label>`
    pub fn recording_to(mut self, store: Arc<dyn SessionStore>, prefix: impl Into<String>) -> Self {
        self.recorder = Some((store, prefix.into()));
        self
    }

    pub fn open(&self, label: &str, instructions: &str, model: &Model) -> ConversationSession {
        let session = ConversationSession::new(
            self.gateway.clone(),
            instructions,
            model.clone(),
            self.retry.clone(),
        );
        match &self.recorder {
            Some((store, prefix)) => session.record_to(store.clone(), format!("{prefix}-{label}")),
            None => session,
        }
    }
}
