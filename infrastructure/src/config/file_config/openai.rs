//! OpenAI connection settings from TOML (`[openai]` section)

use crate::openai::DEFAULT_BASE_URL;
use profiler_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// # Example
///
/// ```toml
/// [openai]
/// base_url = "https://api.openai.com/v1"
/// api_key_file = "chatgpt_api_key.txt"
/// timeout_secs = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    pub base_url: String,
    /// Text file holding the API key
    pub api_key_file: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_file: "chatgpt_api_key.txt".to_string(),
            timeout_secs: 300,
        }
    }
}

impl FileOpenAiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidConstraint {
                    field: "openai.base_url".to_string(),
                },
                "openai.base_url cannot be empty",
            ));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidConstraint {
                    field: "openai.timeout_secs".to_string(),
                },
                "openai.timeout_secs must be at least 1",
            ));
        }
        issues
    }
}
