//! Chunk sizing from TOML (`[chunking]` section)

use profiler_application::ChunkingParams;
use profiler_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// # Example
///
/// ```toml
/// [chunking]
/// max_words_per_chunk = 10000
/// slack_words = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChunkingConfig {
    pub max_words_per_chunk: usize,
    pub slack_words: usize,
}

impl Default for FileChunkingConfig {
    fn default() -> Self {
        let params = ChunkingParams::default();
        Self {
            max_words_per_chunk: params.max_words_per_chunk,
            slack_words: params.slack_words,
        }
    }
}

impl FileChunkingConfig {
    pub fn to_chunking_params(&self) -> (ChunkingParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.max_words_per_chunk == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidConstraint {
                    field: "chunking.max_words_per_chunk".to_string(),
                },
                "chunking.max_words_per_chunk must be at least 1",
            ));
        }
        let params = ChunkingParams {
            max_words_per_chunk: self.max_words_per_chunk.max(1),
            slack_words: self.slack_words,
        };
        (params, issues)
    }
}
