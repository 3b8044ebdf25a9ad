//! Role-based model configuration from TOML (`[models]` section)

use profiler_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Role-based model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// full = "gpt-3.5-turbo-16k"   # chunk analysis + synthesis
/// mini = "gpt-3.5-turbo"       # category extraction + bullet reformat
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub full: Option<String>,
    pub mini: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Parse the full model, falling back to the default
    pub fn parse_full(&self) -> (Model, Vec<ConfigIssue>) {
        let (model, issues) = Self::parse_single_model("full", self.full.as_ref());
        (model.unwrap_or_else(Model::default_full), issues)
    }

    /// Parse the mini model, falling back to the default
    pub fn parse_mini(&self) -> (Model, Vec<ConfigIssue>) {
        let (model, issues) = Self::parse_single_model("mini", self.mini.as_ref());
        (model.unwrap_or_else(Model::default_mini), issues)
    }
}
