//! Comment entities

use crate::util::word_count;
use serde::{Deserialize, Serialize};

/// A single reply extracted from the comment archive (Entity)
///
/// `reply_comment` is already normalized to plain ASCII text. Comments are
/// immutable once extracted; their position in a [`CommentSet`] decides
/// chunk boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub post_title: String,
    pub reply_comment: String,
}

impl Comment {
    pub fn new(post_title: impl Into<String>, reply_comment: impl Into<String>) -> Self {
        Self {
            post_title: post_title.into(),
            reply_comment: reply_comment.into(),
        }
    }

    /// Whitespace-delimited token count of the reply body
    pub fn word_count(&self) -> usize {
        word_count(&self.reply_comment)
    }
}

/// Ordered comment history of one user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentSet {
    comments: Vec<Comment>,
    total_word_count: usize,
}

impl CommentSet {
    pub fn new(comments: Vec<Comment>) -> Self {
        let total_word_count = comments.iter().map(Comment::word_count).sum();
        Self {
            comments,
            total_word_count,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn total_word_count(&self) -> usize {
        self.total_word_count
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Word counts of every comment, in order
    pub fn word_counts(&self) -> Vec<usize> {
        self.comments.iter().map(Comment::word_count).collect()
    }
}

impl From<Vec<Comment>> for CommentSet {
    fn from(comments: Vec<Comment>) -> Self {
        Self::new(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_word_count() {
        let comment = Comment::new("Title", "I think\nthat's  right");
        assert_eq!(comment.word_count(), 3);
    }

    #[test]
    fn test_comment_set_totals() {
        let set = CommentSet::new(vec![
            Comment::new("a", "one two three"),
            Comment::new("b", "four"),
            Comment::new("c", ""),
        ]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.total_word_count(), 4);
        assert_eq!(set.word_counts(), vec![3, 1, 0]);
    }

    #[test]
    fn test_empty_comment_set() {
        let set = CommentSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total_word_count(), 0);
    }
}
