//! Chunk entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Inclusive index range into a comment sequence (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkRange {
    pub from_index: usize,
    pub to_index: usize,
}

impl ChunkRange {
    /// Create a range, rejecting `from > to`
    pub fn new(from_index: usize, to_index: usize) -> Result<Self, DomainError> {
        if from_index > to_index {
            return Err(DomainError::InvalidChunkRange {
                from: from_index,
                to: to_index,
            });
        }
        Ok(Self {
            from_index,
            to_index,
        })
    }

    /// Number of comments covered (never zero)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.to_index - self.from_index + 1
    }

    /// Slice the covered items out of `items`, clamped to its bounds
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = (self.to_index + 1).min(items.len());
        let start = self.from_index.min(end);
        &items[start..end]
    }
}

impl std::fmt::Display for ChunkRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.from_index, self.to_index)
    }
}

/// Model analysis of one chunk (Entity)
///
/// Immutable once produced; cached on disk so a rerun can skip the analysis
/// phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub from_index: usize,
    pub to_index: usize,
    pub response: String,
}

impl ChunkResult {
    pub fn new(range: ChunkRange, response: impl Into<String>) -> Self {
        Self {
            from_index: range.from_index,
            to_index: range.to_index,
            response: response.into(),
        }
    }

    pub fn range(&self) -> ChunkRange {
        ChunkRange {
            from_index: self.from_index,
            to_index: self.to_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_range_rejects_inverted_bounds() {
        assert!(ChunkRange::new(2, 1).is_err());
        let range = ChunkRange::new(1, 1).unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_chunk_range_slice() {
        let items = ["a", "b", "c", "d"];
        let range = ChunkRange::new(1, 2).unwrap();
        assert_eq!(range.slice(&items), &["b", "c"]);

        let past_end = ChunkRange::new(3, 9).unwrap();
        assert_eq!(past_end.slice(&items), &["d"]);
    }

    #[test]
    fn test_chunk_result_keeps_range() {
        let range = ChunkRange::new(4, 7).unwrap();
        let result = ChunkResult::new(range, "profile");
        assert_eq!(result.range(), range);
        assert_eq!(range.to_string(), "4..=7");
    }
}
