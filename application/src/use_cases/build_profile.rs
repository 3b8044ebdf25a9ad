//! Build Profile use case.
//!
//! The whole pipeline for one user:
//!
//! 1. Extract comments and save them for inspection
//! 2. Size and plan chunks
//! 3. Reuse cached chunk analyses when their key matches, else analyze
//! 4. Synthesize the profile and save it

use super::analyze_chunks::AnalyzeChunksUseCase;
use super::synthesize_profile::{SynthesisInput, SynthesizeError, SynthesizeProfileUseCase};
use crate::config::PipelineConfig;
use crate::conversation::{ConversationError, SessionFactory};
use crate::ports::artifact_store::{ArtifactStore, StoreError};
use crate::ports::comment_source::{CommentSource, SourceError};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::ports::session_store::SessionStore;
use profiler_domain::{
    ChunkCacheKey, ChunkPlan, ChunkResult, CommentSet, DomainError, Phase, SynthesisStrategy,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building a profile
#[derive(Error, Debug)]
pub enum BuildProfileError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Chunk analysis failed: {0}")]
    Analysis(#[from] ConversationError),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesizeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the [`BuildProfileUseCase`].
#[derive(Debug, Clone)]
pub struct BuildProfileInput {
    pub username: String,
    /// Ignore cached chunk analyses and the category checkpoint
    pub refresh: bool,
}

impl BuildProfileInput {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            refresh: false,
        }
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub username: String,
    pub comment_count: usize,
    pub total_words: usize,
    pub chunk_target: usize,
    pub chunks: usize,
    /// Whether the analysis phase was served from the cache
    pub chunk_results_cached: bool,
    pub strategy: SynthesisStrategy,
    pub profile: String,
    pub output_path: PathBuf,
}

/// Use case for building one user's profile end to end
pub struct BuildProfileUseCase {
    source: Arc<dyn CommentSource>,
    artifacts: Arc<dyn ArtifactStore>,
    gateway: Arc<dyn LlmGateway>,
    sessions: Option<Arc<dyn SessionStore>>,
    config: PipelineConfig,
}

impl BuildProfileUseCase {
    pub fn new(
        source: Arc<dyn CommentSource>,
        artifacts: Arc<dyn ArtifactStore>,
        gateway: Arc<dyn LlmGateway>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            artifacts,
            gateway,
            sessions: None,
            config,
        }
    }

    /// Record every session the pipeline opens to `store`
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn execute(
        &self,
        input: BuildProfileInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ProfileReport, BuildProfileError> {
        let username = input.username.as_str();
        info!("Building profile for {}", username);

        let comments = self.source.extract(username)?;
        self.artifacts.save_comments(username, &comments)?;
        if comments.is_empty() {
            return Err(DomainError::NoComments.into());
        }

        let chunking = &self.config.chunking;
        let plan = ChunkPlan::build(
            &comments,
            chunking.max_words_per_chunk,
            chunking.slack_words,
        );
        info!(
            "{} comments, {} words, target {} words per chunk, {} chunks",
            comments.len(),
            comments.total_word_count(),
            plan.target_words(),
            plan.len()
        );
        for (position, range) in plan.ranges().iter().enumerate() {
            debug!("Chunk {}: comments {}", position + 1, range);
        }

        let key = ChunkCacheKey::compute(&self.config.models.full, &plan, &comments);
        let sessions = self.session_factory(username);

        let (results, cached) = match self.cached_results(&input, &key, &plan) {
            Some(results) => {
                progress.on_phase_skipped(&Phase::Analysis, "cached analyses");
                (results, true)
            }
            None => {
                let results = self.analyze(&sessions, username, &comments, &plan, progress).await?;
                self.artifacts.save_chunk_results(username, &key, &results)?;
                (results, false)
            }
        };

        if input.refresh {
            self.clear_checkpoint(username);
        }

        let synthesizer = SynthesizeProfileUseCase::new(sessions, self.config.models.clone())
            .with_checkpoints(self.artifacts.clone());
        let profile = synthesizer
            .execute(
                SynthesisInput {
                    username,
                    results: &results,
                    strategy: self.config.strategy,
                    cache_key: Some(&key),
                },
                progress,
            )
            .await?;

        let output_path = self.artifacts.save_profile(username, &profile)?;
        self.clear_checkpoint(username);
        info!("Profile written to {}", output_path.display());

        Ok(ProfileReport {
            username: input.username.clone(),
            comment_count: comments.len(),
            total_words: comments.total_word_count(),
            chunk_target: plan.target_words(),
            chunks: plan.len(),
            chunk_results_cached: cached,
            strategy: self.config.strategy,
            profile,
            output_path,
        })
    }

    fn session_factory(&self, username: &str) -> SessionFactory {
        let factory = SessionFactory::new(self.gateway.clone(), self.config.retry.clone());
        match &self.sessions {
            Some(store) => factory.recording_to(store.clone(), username),
            None => factory,
        }
    }

    async fn analyze(
        &self,
        sessions: &SessionFactory,
        username: &str,
        comments: &CommentSet,
        plan: &ChunkPlan,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<ChunkResult>, ConversationError> {
        AnalyzeChunksUseCase::new(sessions.clone(), self.config.models.full.clone())
            .execute(username, comments, plan, progress)
            .await
    }

    /// Cached analyses for exactly this plan, if any
    fn cached_results(
        &self,
        input: &BuildProfileInput,
        key: &ChunkCacheKey,
        plan: &ChunkPlan,
    ) -> Option<Vec<ChunkResult>> {
        if input.refresh {
            info!("Refresh requested, ignoring cached analyses");
            return None;
        }
        match self.artifacts.load_chunk_results(&input.username) {
            Ok(Some(cached)) if cached.key != *key => {
                warn!("Cached analyses are stale (comments or chunking changed), recomputing");
                None
            }
            Ok(Some(cached)) if cached.results.len() != plan.len() => {
                warn!(
                    "Cached analyses cover {} chunks, expected {}, recomputing",
                    cached.results.len(),
                    plan.len()
                );
                None
            }
            Ok(Some(cached)) => {
                info!("Using {} cached chunk analyses", cached.results.len());
                Some(cached.results)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read cached analyses, recomputing: {}", e);
                None
            }
        }
    }

    fn clear_checkpoint(&self, username: &str) {
        if let Err(e) = self.artifacts.clear_category_checkpoint(username) {
            warn!("Failed to remove category checkpoint: {}", e);
        }
    }
}
