//! Pipeline parameters: use case control.
//!
//! [`PipelineConfig`] groups the static parameters that control
//! [`BuildProfileUseCase`](crate::use_cases::build_profile::BuildProfileUseCase).
//! The infrastructure layer builds it from the merged file configuration.

use profiler_domain::{Model, SynthesisStrategy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chunk sizing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingParams {
    /// Ceiling used to pick how many chunks the history is split into.
    pub max_words_per_chunk: usize,
    /// Buffer added to the even per-chunk target.
    pub slack_words: usize,
}

impl Default for ChunkingParams {
    fn default() -> Self {
        Self {
            max_words_per_chunk: 10_000,
            slack_words: 100,
        }
    }
}

/// Models used for each role in the pipeline.
///
/// | Role | Used for |
/// |------|----------|
/// | full | chunk analysis, synthesis |
/// | mini | category extraction, bullet reformat |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRoles {
    pub full: Model,
    pub mini: Model,
}

impl Default for ModelRoles {
    fn default() -> Self {
        Self {
            full: Model::default_full(),
            mini: Model::default_mini(),
        }
    }
}

/// Recovery limits for a single reply request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: usize,
    /// Wait before retrying a rate-limited request.
    pub rate_limit_cooldown: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            rate_limit_cooldown: Duration::from_secs(20),
        }
    }
}

impl RetryPolicy {
    /// Policy that retries without waiting
    pub fn immediate(max_retries: usize) -> Self {
        Self {
            max_retries,
            rate_limit_cooldown: Duration::ZERO,
        }
    }
}

/// Everything the pipeline needs besides its adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub chunking: ChunkingParams,
    pub models: ModelRoles,
    pub retry: RetryPolicy,
    pub strategy: SynthesisStrategy,
}

impl PipelineConfig {
    // ==================== Builder Methods ====================

    pub fn with_chunking(mut self, max_words_per_chunk: usize, slack_words: usize) -> Self {
        self.chunking = ChunkingParams {
            max_words_per_chunk,
            slack_words,
        };
        self
    }

    pub fn with_models(mut self, full: Model, mini: Model) -> Self {
        self.models = ModelRoles { full, mini };
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_strategy(mut self, strategy: SynthesisStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
