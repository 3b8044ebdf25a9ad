//! Synthesis strategy from TOML (`[synthesis]` section)

use profiler_domain::{ConfigIssue, ConfigIssueCode, SynthesisStrategy};
use serde::{Deserialize, Serialize};

/// # Example
///
/// ```toml
/// [synthesis]
/// strategy = "category-wise"   # or "freeform"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSynthesisConfig {
    pub strategy: String,
}

impl Default for FileSynthesisConfig {
    fn default() -> Self {
        Self {
            strategy: SynthesisStrategy::default().as_str().to_string(),
        }
    }
}

impl FileSynthesisConfig {
    /// Parse the strategy; unknown values warn and fall back to freeform
    pub fn parse_strategy(&self) -> (SynthesisStrategy, Vec<ConfigIssue>) {
        match self.strategy.parse::<SynthesisStrategy>() {
            Ok(strategy) => (strategy, Vec::new()),
            Err(_) => (
                SynthesisStrategy::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "synthesis.strategy".to_string(),
                        value: self.strategy.clone(),
                        valid_values: vec![
                            SynthesisStrategy::Freeform.as_str().to_string(),
                            SynthesisStrategy::CategoryWise.as_str().to_string(),
                        ],
                    },
                    format!(
                        "synthesis.strategy: unknown value '{}', falling back to '{}'",
                        self.strategy,
                        SynthesisStrategy::default()
                    ),
                )],
            ),
        }
    }
}
