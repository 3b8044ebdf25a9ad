//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No comments to profile")]
    NoComments,

    #[error("Invalid chunk range: {from}..={to}")]
    InvalidChunkRange { from: usize, to: usize },

    #[error("Unknown profile category: {0}")]
    UnknownCategory(String),

    #[error("Unknown synthesis strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown message actor: {0}")]
    UnknownActor(String),
}
