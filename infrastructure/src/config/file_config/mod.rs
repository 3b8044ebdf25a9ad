//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod chunking;
mod models;
mod openai;
mod paths;
mod retry;
mod synthesis;

pub use chunking::FileChunkingConfig;
pub use models::FileModelsConfig;
pub use openai::FileOpenAiConfig;
pub use paths::FilePathsConfig;
pub use retry::FileRetryConfig;
pub use synthesis::FileSynthesisConfig;

use profiler_application::{ModelRoles, PipelineConfig};
use profiler_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chunk sizing
    pub chunking: FileChunkingConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Recovery limits per request
    pub retry: FileRetryConfig,
    /// Synthesis strategy
    pub synthesis: FileSynthesisConfig,
    /// API connection
    pub openai: FileOpenAiConfig,
    /// Input, output and session directories
    pub paths: FilePathsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.chunking.to_chunking_params().1);
        issues.extend(self.models.parse_full().1);
        issues.extend(self.models.parse_mini().1);
        issues.extend(self.synthesis.parse_strategy().1);
        issues.extend(self.openai.validate());
        issues
    }

    /// Build the pipeline configuration, applying fallbacks for invalid values
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let chunking = self.chunking.to_chunking_params().0;
        PipelineConfig {
            chunking,
            models: ModelRoles {
                full: self.models.parse_full().0,
                mini: self.models.parse_mini().0,
            },
            retry: self.retry.to_retry_policy(),
            strategy: self.synthesis.parse_strategy().0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profiler_domain::{Model, Severity, SynthesisStrategy};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[chunking]
max_words_per_chunk = 6000
slack_words = 50

[models]
full = "gpt-4o"
mini = "gpt-4o-mini"

[retry]
max_retries = 2
rate_limit_cooldown_secs = 5

[synthesis]
strategy = "category-wise"

[openai]
base_url = "http://localhost:8080/v1"
api_key_file = "/run/secrets/openai"
timeout_secs = 60

[paths]
input_dir = "archives"
output_dir = "profiles"
session_dir = "sessions"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.chunking.max_words_per_chunk, 6000);
        assert_eq!(pipeline.chunking.slack_words, 50);
        assert_eq!(pipeline.models.full, Model::Gpt4o);
        assert_eq!(pipeline.models.mini, Model::Gpt4oMini);
        assert_eq!(pipeline.retry.max_retries, 2);
        assert_eq!(pipeline.retry.rate_limit_cooldown, Duration::from_secs(5));
        assert_eq!(pipeline.strategy, SynthesisStrategy::CategoryWise);

        assert_eq!(config.openai.timeout(), Duration::from_secs(60));
        assert_eq!(config.paths.session_dir.as_deref(), Some("sessions"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
full = "gpt-4.1"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.models.full, Model::Gpt41);
        // Defaults should apply
        assert_eq!(pipeline.models.mini, Model::Gpt35Turbo);
        assert_eq!(pipeline.chunking.max_words_per_chunk, 10_000);
        assert_eq!(config.openai.api_key_file, "chatgpt_api_key.txt");
        assert_eq!(config.paths.output_dir, ".");
    }

    #[test]
    fn test_default_config_matches_pipeline_defaults() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.to_pipeline_config(), PipelineConfig::default());
    }

    #[test]
    fn test_validate_reports_issues() {
        let toml_str = r#"
[chunking]
max_words_per_chunk = 0

[models]
mini = ""

[synthesis]
strategy = "haiku"

[openai]
timeout_secs = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
        let warning = issues
            .iter()
            .find(|i| i.severity == Severity::Warning)
            .unwrap();
        assert!(warning.message.contains("haiku"));

        // invalid values fall back rather than panic
        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.chunking.max_words_per_chunk, 1);
        assert_eq!(pipeline.strategy, SynthesisStrategy::Freeform);
    }
}
