//! Application layer for comment-profiler
//!
//! This crate contains use cases, port definitions, conversation sessions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod conversation;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ChunkingParams, ModelRoles, PipelineConfig, RetryPolicy};
pub use conversation::{ConversationError, ConversationSession, SessionFactory};
pub use ports::{
    artifact_store::{ArtifactStore, CachedChunkResults, CategoryCheckpoint, StoreError},
    comment_source::{CommentSource, SourceError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    session_store::SessionStore,
};
pub use use_cases::analyze_chunks::AnalyzeChunksUseCase;
pub use use_cases::build_profile::{
    BuildProfileError, BuildProfileInput, BuildProfileUseCase, ProfileReport,
};
pub use use_cases::synthesize_profile::{
    INSUFFICIENT_DATA, SynthesisInput, SynthesizeError, SynthesizeProfileUseCase,
};
