//! Artifact store port
//!
//! Persists everything a run produces per user: the extracted comments, the
//! chunk analysis cache, the category checkpoint and the final profile.

use profiler_domain::{CategoryProfile, ChunkCacheKey, ChunkResult, CommentSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by file-backed stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed data in {path}: {message}")]
    Format { path: String, message: String },
}

/// Chunk analyses read back from the cache, with the key they were saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedChunkResults {
    pub key: ChunkCacheKey,
    pub results: Vec<ChunkResult>,
}

/// Partially built category-wise profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCheckpoint {
    pub key: ChunkCacheKey,
    pub profile: CategoryProfile,
}

/// Per-user artifact persistence
pub trait ArtifactStore: Send + Sync {
    /// Save the extracted comments for inspection and reuse
    fn save_comments(&self, username: &str, comments: &CommentSet) -> Result<(), StoreError>;

    /// Load cached chunk analyses, `None` when no cache exists
    fn load_chunk_results(&self, username: &str)
    -> Result<Option<CachedChunkResults>, StoreError>;

    fn save_chunk_results(
        &self,
        username: &str,
        key: &ChunkCacheKey,
        results: &[ChunkResult],
    ) -> Result<(), StoreError>;

    fn load_category_checkpoint(
        &self,
        username: &str,
    ) -> Result<Option<CategoryCheckpoint>, StoreError>;

    fn save_category_checkpoint(
        &self,
        username: &str,
        checkpoint: &CategoryCheckpoint,
    ) -> Result<(), StoreError>;

    fn clear_category_checkpoint(&self, username: &str) -> Result<(), StoreError>;

    /// Write the final profile, returning where it was written
    fn save_profile(&self, username: &str, profile: &str) -> Result<PathBuf, StoreError>;
}
