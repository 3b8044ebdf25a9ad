//! Cache key for chunk analysis results.
//!
//! Cached chunk responses are only valid for the exact input they were
//! computed from. The key is a SHA-256 digest over the analysis model, the
//! chunk target, every range boundary and every comment body, so changing any
//! of them invalidates the cache.

use super::planner::ChunkPlan;
use crate::comment::entities::CommentSet;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 content hash (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkCacheKey(String);

impl ChunkCacheKey {
    pub fn compute(model: &Model, plan: &ChunkPlan, comments: &CommentSet) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(model.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(plan.target_words().to_le_bytes());
        for range in plan.ranges() {
            hasher.update(range.from_index.to_le_bytes());
            hasher.update(range.to_index.to_le_bytes());
        }
        for comment in comments.comments() {
            hasher.update(comment.reply_comment.as_bytes());
            hasher.update([0u8]);
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Derive a key that also covers `model`.
    ///
    /// Used for artifacts produced by a second model from the same analyses.
    pub fn scoped_to(&self, model: &Model) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        hasher.update(b"\n");
        hasher.update(model.as_str().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wrap a key read back from storage
    pub fn from_stored(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChunkCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::entities::Comment;

    fn comments() -> CommentSet {
        CommentSet::new(vec![
            Comment::new("t1", "first reply here"),
            Comment::new("t2", "second reply"),
        ])
    }

    #[test]
    fn test_same_input_same_key() {
        let set = comments();
        let plan = ChunkPlan::build(&set, 10_000, 100);
        let a = ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &plan, &set);
        let b = ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &plan, &set);
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn test_key_changes_with_model() {
        let set = comments();
        let plan = ChunkPlan::build(&set, 10_000, 100);
        let a = ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &plan, &set);
        let b = ChunkCacheKey::compute(&Model::Gpt4o, &plan, &set);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_changes_with_chunking() {
        let set = comments();
        let wide = ChunkPlan::build(&set, 10_000, 100);
        let narrow = ChunkPlan::build(&set, 2, 0);
        assert_ne!(
            ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &wide, &set),
            ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &narrow, &set)
        );
    }

    #[test]
    fn test_key_changes_with_comment_text() {
        let set = comments();
        let edited = CommentSet::new(vec![
            Comment::new("t1", "first reply edited"),
            Comment::new("t2", "second reply"),
        ]);
        let plan = ChunkPlan::build(&set, 10_000, 100);
        assert_ne!(
            ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &plan, &set),
            ChunkCacheKey::compute(&Model::Gpt35Turbo16k, &plan, &edited)
        );
    }

    #[test]
    fn test_scoped_key_depends_on_model() {
        let key = ChunkCacheKey::from_stored("abc");
        let mini = key.scoped_to(&Model::Gpt35Turbo);
        assert_eq!(mini, key.scoped_to(&Model::Gpt35Turbo));
        assert_ne!(mini, key.scoped_to(&Model::Gpt4oMini));
        assert_ne!(mini, key);
    }
}
