//! Test doubles for the application ports.

use crate::ports::artifact_store::{
    ArtifactStore, CachedChunkResults, CategoryCheckpoint, StoreError,
};
use crate::ports::comment_source::{CommentSource, SourceError};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::session_store::SessionStore;
use async_trait::async_trait;
use profiler_domain::{
    ChatTurn, ChunkCacheKey, ChunkResult, CommentSet, Model, Phase, SessionState,
};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

type Call = (Model, Vec<ChatTurn>);

/// Gateway that replays a fixed list of results in order
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, model: &Model, turns: &[ChatTurn]) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), turns.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::InvalidResponse("No more responses".into())))
    }
}

/// Gateway that answers each request with a function of its turns
pub struct FnGateway<F> {
    respond: F,
    calls: Mutex<Vec<Call>>,
}

impl<F> FnGateway<F>
where
    F: Fn(&Model, &[ChatTurn]) -> Result<String, GatewayError> + Send + Sync,
{
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<F> LlmGateway for FnGateway<F>
where
    F: Fn(&Model, &[ChatTurn]) -> Result<String, GatewayError> + Send + Sync,
{
    async fn complete(&self, model: &Model, turns: &[ChatTurn]) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), turns.to_vec()));
        (self.respond)(model, turns)
    }
}

/// Content of the last turn of a request
pub fn last_turn(turns: &[ChatTurn]) -> &str {
    turns.last().map(|t| t.content.as_str()).unwrap_or("")
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, SessionState>>,
}

impl MemorySessionStore {
    pub fn get(&self, name: &str) -> Option<SessionState> {
        self.sessions.lock().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.sessions.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, name: &str) -> Option<SessionState> {
        self.get(name)
    }

    fn save(&self, name: &str, state: &SessionState) -> Result<(), StoreError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(name.to_string(), state.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryArtifactStore {
    pub comments: Mutex<Option<CommentSet>>,
    pub chunk_results: Mutex<Option<CachedChunkResults>>,
    pub checkpoint: Mutex<Option<CategoryCheckpoint>>,
    pub checkpoint_saves: Mutex<usize>,
    pub profile: Mutex<Option<String>>,
}

impl ArtifactStore for MemoryArtifactStore {
    fn save_comments(&self, _username: &str, comments: &CommentSet) -> Result<(), StoreError> {
        *self.comments.lock().unwrap() = Some(comments.clone());
        Ok(())
    }

    fn load_chunk_results(
        &self,
        _username: &str,
    ) -> Result<Option<CachedChunkResults>, StoreError> {
        Ok(self.chunk_results.lock().unwrap().clone())
    }

    fn save_chunk_results(
        &self,
        _username: &str,
        key: &ChunkCacheKey,
        results: &[ChunkResult],
    ) -> Result<(), StoreError> {
        *self.chunk_results.lock().unwrap() = Some(CachedChunkResults {
            key: key.clone(),
            results: results.to_vec(),
        });
        Ok(())
    }

    fn load_category_checkpoint(
        &self,
        _username: &str,
    ) -> Result<Option<CategoryCheckpoint>, StoreError> {
        Ok(self.checkpoint.lock().unwrap().clone())
    }

    fn save_category_checkpoint(
        &self,
        _username: &str,
        checkpoint: &CategoryCheckpoint,
    ) -> Result<(), StoreError> {
        *self.checkpoint.lock().unwrap() = Some(checkpoint.clone());
        *self.checkpoint_saves.lock().unwrap() += 1;
        Ok(())
    }

    fn clear_category_checkpoint(&self, _username: &str) -> Result<(), StoreError> {
        *self.checkpoint.lock().unwrap() = None;
        Ok(())
    }

    fn save_profile(&self, username: &str, profile: &str) -> Result<PathBuf, StoreError> {
        *self.profile.lock().unwrap() = Some(profile.to_string());
        Ok(PathBuf::from(format!("{username}_profile.txt")))
    }
}

/// Source returning a fixed comment set
pub struct FixedSource(pub CommentSet);

impl CommentSource for FixedSource {
    fn extract(&self, _username: &str) -> Result<CommentSet, SourceError> {
        Ok(self.0.clone())
    }
}

/// Progress notifier that records every event as a line
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {phase} ({total_tasks})"));
    }

    fn on_task_complete(&self, phase: &Phase, task: &str, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("task {phase}: {task} {success}"));
    }

    fn on_phase_complete(&self, phase: &Phase) {
        self.events.lock().unwrap().push(format!("done {phase}"));
    }

    fn on_phase_skipped(&self, phase: &Phase, reason: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("skip {phase}: {reason}"));
    }
}
