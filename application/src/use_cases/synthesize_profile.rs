//! Synthesize Profile use case.
//!
//! Reduces the per-chunk analyses into one profile. Two strategies:
//!
//! - **Freeform**: one full-model request over every analysis, newest first.
//! - **Category-wise**: per category, extract that category from every
//!   analysis with the mini model, merge the extractions with the full model,
//!   then force bullet formatting (except for Summary).
//!
//! Category-wise runs can checkpoint after each category so that a rerun over
//! the same analyses resumes where the last one stopped.

use crate::config::ModelRoles;
use crate::conversation::{ConversationError, SessionFactory};
use crate::ports::artifact_store::{ArtifactStore, CategoryCheckpoint};
use crate::ports::progress::ProgressNotifier;
use profiler_domain::{
    Actor, CHUNK_SEPARATOR, CategoryProfile, ChunkCacheKey, ChunkResult, Phase, ProfileCategory,
    PromptTemplate, SynthesisStrategy,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Category text used when no analysis mentions the category
pub const INSUFFICIENT_DATA: &str = "Insufficient data.";

#[derive(Error, Debug)]
pub enum SynthesizeError {
    #[error("No chunk analyses to synthesize")]
    NoResults,

    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

/// Input for the [`SynthesizeProfileUseCase`].
#[derive(Debug, Clone, Copy)]
pub struct SynthesisInput<'a> {
    pub username: &'a str,
    pub results: &'a [ChunkResult],
    pub strategy: SynthesisStrategy,
    /// Identity of `results`; checkpoints are only written and resumed with one.
    pub cache_key: Option<&'a ChunkCacheKey>,
}

/// Use case for the synthesis (reduce) phase
pub struct SynthesizeProfileUseCase {
    sessions: SessionFactory,
    models: ModelRoles,
    checkpoints: Option<Arc<dyn ArtifactStore>>,
}

impl SynthesizeProfileUseCase {
    pub fn new(sessions: SessionFactory, models: ModelRoles) -> Self {
        Self {
            sessions,
            models,
            checkpoints: None,
        }
    }

    /// Checkpoint category-wise progress to `store`
    pub fn with_checkpoints(mut self, store: Arc<dyn ArtifactStore>) -> Self {
        self.checkpoints = Some(store);
        self
    }

    pub async fn execute(
        &self,
        input: SynthesisInput<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, SynthesizeError> {
        if input.results.is_empty() {
            return Err(SynthesizeError::NoResults);
        }

        match input.strategy {
            SynthesisStrategy::Freeform if input.results.len() == 1 => {
                info!("Single chunk analysis, using it as the profile");
                progress.on_phase_skipped(&Phase::Synthesis, "single chunk");
                Ok(input.results[0].response.clone())
            }
            SynthesisStrategy::Freeform => self.freeform(input, progress).await,
            SynthesisStrategy::CategoryWise => self.category_wise(input, progress).await,
        }
    }

    async fn freeform(
        &self,
        input: SynthesisInput<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, SynthesizeError> {
        let phase = Phase::Synthesis;
        progress.on_phase_start(&phase, 1);
        info!(
            "Synthesizing {} analyses into one profile",
            input.results.len()
        );

        let combined = input
            .results
            .iter()
            .rev()
            .map(|r| r.response.as_str())
            .collect::<Vec<_>>()
            .join(CHUNK_SEPARATOR);

        let mut session = self.sessions.open(
            "synthesis",
            PromptTemplate::profiler_system(),
            &self.models.full,
        );
        session.append(&PromptTemplate::synthesis_setup(input.username), Actor::User);
        session.append(&combined, Actor::Assistant);
        session.append(
            &PromptTemplate::synthesis_execution(input.username),
            Actor::User,
        );

        let profile = session.request_reply(None, true).await;
        progress.on_task_complete(&phase, "synthesis", profile.is_ok());
        let profile = profile?;

        progress.on_phase_complete(&phase);
        Ok(profile)
    }

    async fn category_wise(
        &self,
        input: SynthesisInput<'_>,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, SynthesizeError> {
        let mut profile = self.restore_checkpoint(&input);

        for category in ProfileCategory::ALL {
            if profile.contains(category) {
                progress.on_phase_skipped(&Phase::Category(category), "restored from checkpoint");
                continue;
            }
            let text = self
                .synthesize_category(input.username, category, input.results, progress)
                .await?;
            profile.insert(category, text);
            self.save_checkpoint(&input, &profile);
        }

        Ok(profile.render())
    }

    async fn synthesize_category(
        &self,
        username: &str,
        category: ProfileCategory,
        results: &[ChunkResult],
        progress: &dyn ProgressNotifier,
    ) -> Result<String, ConversationError> {
        let phase = Phase::Category(category);
        let extra_passes = if category.is_prose() { 1 } else { 2 };
        progress.on_phase_start(&phase, results.len() + extra_passes);
        info!("Synthesizing category: {}", category.display_name());

        let directive = PromptTemplate::category_extraction(username, category);
        let mut extractions = Vec::new();
        for (position, result) in results.iter().enumerate() {
            let label = format!("{}-extract-{:03}", category.slug(), position + 1);
            let mut session =
                self.sessions
                    .open(&label, PromptTemplate::editor_system(), &self.models.mini);
            session.append(&result.response, Actor::User);
            let extracted = session.request_reply(Some(&directive), true).await?;
            progress.on_task_complete(&phase, &format!("extract {}", result.range()), true);

            let extracted = extracted.trim();
            if extracted.is_empty() {
                debug!(
                    "No {} content in analysis of comments {}",
                    category.display_name(),
                    result.range()
                );
            } else {
                extractions.push(extracted.to_string());
            }
        }

        if extractions.is_empty() {
            info!("No analysis mentions {}", category.display_name());
            progress.on_phase_complete(&phase);
            return Ok(INSUFFICIENT_DATA.to_string());
        }

        let mut session = self.sessions.open(
            &format!("{}-synthesis", category.slug()),
            PromptTemplate::profiler_system(),
            &self.models.full,
        );
        session.append(&extractions.join(CHUNK_SEPARATOR), Actor::User);
        let mut text = session
            .request_reply(
                Some(&PromptTemplate::category_synthesis(username, category)),
                true,
            )
            .await?;
        progress.on_task_complete(&phase, "synthesize", true);

        if !category.is_prose() {
            let mut session = self.sessions.open(
                &format!("{}-reformat", category.slug()),
                PromptTemplate::editor_system(),
                &self.models.mini,
            );
            session.append(&text, Actor::User);
            text = session
                .request_reply(Some(&PromptTemplate::bullet_reformat(category)), true)
                .await?;
            progress.on_task_complete(&phase, "reformat", true);
        }

        progress.on_phase_complete(&phase);

        let text = text.trim();
        if text.is_empty() {
            Ok(INSUFFICIENT_DATA.to_string())
        } else {
            Ok(text.to_string())
        }
    }

    /// Category text depends on the analyses and on the mini model
    fn checkpoint_key(&self, input: &SynthesisInput<'_>) -> Option<ChunkCacheKey> {
        input.cache_key.map(|key| key.scoped_to(&self.models.mini))
    }

    fn restore_checkpoint(&self, input: &SynthesisInput<'_>) -> CategoryProfile {
        let (Some(store), Some(key)) = (&self.checkpoints, self.checkpoint_key(input)) else {
            return CategoryProfile::new();
        };
        match store.load_category_checkpoint(input.username) {
            Ok(Some(checkpoint)) if checkpoint.key == key => {
                info!(
                    "Resuming category synthesis with {}/{} categories done",
                    checkpoint.profile.len(),
                    ProfileCategory::ALL.len()
                );
                checkpoint.profile
            }
            Ok(Some(_)) => {
                info!("Ignoring category checkpoint from different analyses or models");
                CategoryProfile::new()
            }
            Ok(None) => CategoryProfile::new(),
            Err(e) => {
                warn!("Failed to read category checkpoint: {}", e);
                CategoryProfile::new()
            }
        }
    }

    fn save_checkpoint(&self, input: &SynthesisInput<'_>, profile: &CategoryProfile) {
        let (Some(store), Some(key)) = (&self.checkpoints, self.checkpoint_key(input)) else {
            return;
        };
        let checkpoint = CategoryCheckpoint {
            key,
            profile: profile.clone(),
        };
        if let Err(e) = store.save_category_checkpoint(input.username, &checkpoint) {
            warn!("Failed to save category checkpoint: {}", e);
        }
    }
}
