//! Domain layer for comment-profiler
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chunking
//!
//! A comment history rarely fits in one model request. [`ChunkPlan`] sizes
//! chunks evenly under a word ceiling and partitions the history greedily into
//! contiguous [`ChunkRange`]s.
//!
//! ## Sessions
//!
//! A [`SessionState`] is an ordered message log. Messages are never deleted;
//! under context pressure the oldest evictable one is only marked
//! not-sendable.
//!
//! ## Profile
//!
//! Per-chunk analyses are reduced into one profile, either freeform or
//! category by category ([`SynthesisStrategy`]).

pub mod chunk;
pub mod comment;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod profile;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use chunk::{
    cache_key::ChunkCacheKey,
    entities::{ChunkRange, ChunkResult},
    planner::{ChunkPlan, plan_chunks, target_words},
};
pub use comment::entities::{Comment, CommentSet};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use crate::core::{error::DomainError, model::Model};
pub use pipeline::Phase;
pub use profile::{
    category::ProfileCategory, entities::CategoryProfile, strategy::SynthesisStrategy,
};
pub use prompt::{CHUNK_SEPARATOR, PromptTemplate};
pub use session::{
    entities::{Actor, ChatTurn, Message, Role, SessionState},
    inserts::KeywordInserts,
};
