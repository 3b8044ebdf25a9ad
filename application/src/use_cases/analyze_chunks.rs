//! Analyze Chunks use case.
//!
//! Runs one fresh profiling session per chunk range. Each session receives
//! the chunk's comment bodies as one user turn and the profiling directive as
//! a second, then returns the model's analysis.

use crate::conversation::{ConversationError, SessionFactory};
use crate::ports::progress::ProgressNotifier;
use profiler_domain::{
    Actor, CHUNK_SEPARATOR, ChunkPlan, ChunkResult, CommentSet, Model, Phase, PromptTemplate,
};
use tracing::{info, warn};

/// Use case for the analysis (map) phase
pub struct AnalyzeChunksUseCase {
    sessions: SessionFactory,
    model: Model,
}

impl AnalyzeChunksUseCase {
    pub fn new(sessions: SessionFactory, model: Model) -> Self {
        Self { sessions, model }
    }

    /// Analyze every range of `plan`, in order.
    ///
    /// Stops at the first chunk whose request fails.
    pub async fn execute(
        &self,
        username: &str,
        comments: &CommentSet,
        plan: &ChunkPlan,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<ChunkResult>, ConversationError> {
        let phase = Phase::Analysis;
        progress.on_phase_start(&phase, plan.len());

        let directive = PromptTemplate::chunk_analysis(username);
        let mut results = Vec::with_capacity(plan.len());

        for (position, range) in plan.ranges().iter().enumerate() {
            let compiled = range
                .slice(comments.comments())
                .iter()
                .map(|c| c.reply_comment.as_str())
                .collect::<Vec<_>>()
                .join(CHUNK_SEPARATOR);

            let label = format!("chunk-{:03}", position + 1);
            let mut session =
                self.sessions
                    .open(&label, PromptTemplate::profiler_system(), &self.model);
            session.append(&compiled, Actor::User);
            session.append(&directive, Actor::User);

            let task = format!("comments {}", range);
            match session.request_reply(None, true).await {
                Ok(response) => {
                    info!(
                        "Analyzed chunk {}/{} (comments {})",
                        position + 1,
                        plan.len(),
                        range
                    );
                    progress.on_task_complete(&phase, &task, true);
                    results.push(ChunkResult::new(*range, response));
                }
                Err(e) => {
                    warn!("Analysis of comments {} failed: {}", range, e);
                    progress.on_task_complete(&phase, &task, false);
                    return Err(e);
                }
            }
        }

        progress.on_phase_complete(&phase);
        Ok(results)
    }
}
