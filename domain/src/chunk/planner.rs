//! Chunk sizing and greedy range planning.
//!
//! Sizing works in two steps:
//!
//! 1. [`target_words`] spreads the total evenly over the fewest chunks that
//!    keep each one under the ceiling, then adds a slack buffer so the greedy
//!    pass does not leave a trailing chunk of one or two comments.
//! 2. [`plan_chunks`] walks the comments in order and closes a range whenever
//!    the next comment would push it over the target.
//!
//! The last range is never bounded: whatever remains goes into it.

use super::entities::ChunkRange;
use crate::comment::entities::CommentSet;
use serde::{Deserialize, Serialize};

/// Per-chunk word target for a history of `total_words`.
///
/// Picks the smallest chunk count `n >= 1` with `total_words / n <= max_words_per_chunk`
/// and returns `total_words / n + slack_words`.
pub fn target_words(total_words: usize, max_words_per_chunk: usize, slack_words: usize) -> usize {
    let ceiling = max_words_per_chunk.max(1);
    let chunk_count = total_words.div_ceil(ceiling).max(1);
    total_words / chunk_count + slack_words
}

/// Partition `word_counts` into contiguous ranges of at most `max_words`.
///
/// A range is closed at the previous index when adding the current comment
/// would exceed `max_words`; the current comment then starts the next range.
/// A single comment larger than `max_words` therefore forms its own range.
/// Returns an empty list for an empty input.
pub fn plan_chunks(word_counts: &[usize], max_words: usize) -> Vec<ChunkRange> {
    let mut ranges = Vec::new();
    let Some(last_index) = word_counts.len().checked_sub(1) else {
        return ranges;
    };

    let mut start = 0;
    let mut accumulated = 0;

    for (index, &count) in word_counts.iter().enumerate() {
        if index > start && accumulated + count > max_words {
            ranges.push(ChunkRange {
                from_index: start,
                to_index: index - 1,
            });
            start = index;
            accumulated = count;
        } else {
            accumulated += count;
        }
    }

    ranges.push(ChunkRange {
        from_index: start,
        to_index: last_index,
    });
    ranges
}

/// A sized chunk plan for one comment history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPlan {
    target_words: usize,
    ranges: Vec<ChunkRange>,
}

impl ChunkPlan {
    /// Size and plan chunks for `comments`.
    pub fn build(comments: &CommentSet, max_words_per_chunk: usize, slack_words: usize) -> Self {
        let target = target_words(
            comments.total_word_count(),
            max_words_per_chunk,
            slack_words,
        );
        Self {
            target_words: target,
            ranges: plan_chunks(&comments.word_counts(), target),
        }
    }

    pub fn target_words(&self) -> usize {
        self.target_words
    }

    pub fn ranges(&self) -> &[ChunkRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::entities::Comment;

    fn range(from: usize, to: usize) -> ChunkRange {
        ChunkRange {
            from_index: from,
            to_index: to,
        }
    }

    /// Ranges must be ordered, contiguous and cover `0..len`.
    fn assert_covers(ranges: &[ChunkRange], len: usize) {
        assert_eq!(ranges.first().map(|r| r.from_index), Some(0));
        assert_eq!(ranges.last().map(|r| r.to_index), Some(len - 1));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].to_index + 1, pair[1].from_index);
        }
        for r in ranges {
            assert!(r.from_index <= r.to_index);
        }
    }

    #[test]
    fn test_target_words_single_chunk_adds_slack() {
        assert_eq!(target_words(8_000, 10_000, 100), 8_100);
    }

    #[test]
    fn test_target_words_spreads_evenly() {
        // 25k words need 3 chunks under a 10k ceiling
        assert_eq!(target_words(25_000, 10_000, 100), 8_433);
        // exactly on the ceiling stays one chunk
        assert_eq!(target_words(10_000, 10_000, 0), 10_000);
        assert_eq!(target_words(10_001, 10_000, 0), 5_000);
    }

    #[test]
    fn test_target_words_zero_total() {
        assert_eq!(target_words(0, 10_000, 100), 100);
    }

    #[test]
    fn test_plan_chunks_empty_input() {
        assert!(plan_chunks(&[], 100).is_empty());
    }

    #[test]
    fn test_plan_chunks_oversized_comment_forms_own_chunk() {
        let ranges = plan_chunks(&[50, 40, 5000], 100);
        assert_eq!(ranges, vec![range(0, 1), range(2, 2)]);
    }

    #[test]
    fn test_plan_chunks_closes_when_budget_exceeded() {
        // 50 + 60 exceeds 100, so the first chunk closes after one comment
        let ranges = plan_chunks(&[50, 60, 5000], 100);
        assert_eq!(ranges, vec![range(0, 0), range(1, 1), range(2, 2)]);
    }

    #[test]
    fn test_plan_chunks_leading_oversized_comment() {
        let ranges = plan_chunks(&[500, 10, 10], 100);
        assert_eq!(ranges, vec![range(0, 0), range(1, 2)]);
    }

    #[test]
    fn test_plan_chunks_exact_fit_stays_together() {
        let ranges = plan_chunks(&[40, 60, 1], 100);
        assert_eq!(ranges, vec![range(0, 1), range(2, 2)]);
    }

    #[test]
    fn test_plan_chunks_last_chunk_unbounded_only_by_one_comment() {
        let counts = [30, 30, 30, 30, 30, 30, 30, 250];
        let max = 100;
        let ranges = plan_chunks(&counts, max);
        assert_covers(&ranges, counts.len());

        for r in &ranges {
            let slice = r.slice(&counts);
            let total: usize = slice.iter().sum();
            if total > max {
                // only a lone oversized comment may exceed the target
                assert_eq!(slice.len(), 1);
            }
        }
    }

    #[test]
    fn test_plan_chunks_covers_many_shapes() {
        let shapes: [&[usize]; 5] = [
            &[1],
            &[0, 0, 0],
            &[99, 2, 99, 2, 99],
            &[7; 50],
            &[120, 3, 3, 3, 120, 1],
        ];
        for counts in shapes {
            let ranges = plan_chunks(counts, 100);
            assert_covers(&ranges, counts.len());
        }
    }

    #[test]
    fn test_chunk_plan_build() {
        let comments = CommentSet::new(vec![
            Comment::new("t", "a b c d e"),
            Comment::new("t", "f g h i j"),
            Comment::new("t", "k l m n o"),
        ]);
        // 15 words, ceiling 10 -> 2 chunks of 7 + slack 1 = 8
        let plan = ChunkPlan::build(&comments, 10, 1);
        assert_eq!(plan.target_words(), 8);
        assert_eq!(plan.ranges(), &[range(0, 0), range(1, 1), range(2, 2)]);
    }
}
