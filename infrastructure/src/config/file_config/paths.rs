//! File locations from TOML (`[paths]` section)

use serde::{Deserialize, Serialize};

/// # Example
///
/// ```toml
/// [paths]
/// input_dir = "archives"     # where <username>.html lives
/// output_dir = "profiles"    # caches and the final profile
/// session_dir = "sessions"   # optional, records every session as JSON
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub session_dir: Option<String>,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            input_dir: ".".to_string(),
            output_dir: ".".to_string(),
            session_dir: None,
        }
    }
}
