//! Infrastructure layer for comment-profiler
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod html;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, CredentialError, FileConfig, read_api_key};
pub use html::HtmlCommentSource;
pub use openai::OpenAiGateway;
pub use storage::{CsvArtifactStore, JsonSessionStore};
