//! Comment source port
//!
//! Defines how the pipeline obtains a user's comment history.

use profiler_domain::CommentSet;
use thiserror::Error;

/// Errors raised while reading a comment archive
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Comment archive not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("No result table (#resulttable) in {path}")]
    MissingTable { path: String },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Source of a user's ordered comment history
///
/// Rows that lack expected structure are skipped by implementations; only a
/// document-level problem is an error.
pub trait CommentSource: Send + Sync {
    fn extract(&self, username: &str) -> Result<CommentSet, SourceError>;
}
