//! Retry limits from TOML (`[retry]` section)

use profiler_application::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// # Example
///
/// ```toml
/// [retry]
/// max_retries = 5
/// rate_limit_cooldown_secs = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_retries: usize,
    pub rate_limit_cooldown_secs: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            rate_limit_cooldown_secs: policy.rate_limit_cooldown.as_secs(),
        }
    }
}

impl FileRetryConfig {
    pub fn to_retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            rate_limit_cooldown: Duration::from_secs(self.rate_limit_cooldown_secs),
        }
    }
}
