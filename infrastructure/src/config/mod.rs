//! Configuration file loading for comment-profiler
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PROFILER_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./profiler.toml` or `./.profiler.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/comment-profiler/config.toml`
//! 5. Default values

mod credentials;
mod file_config;
mod loader;

pub use credentials::{CredentialError, read_api_key};
pub use file_config::{
    FileChunkingConfig, FileConfig, FileModelsConfig, FileOpenAiConfig, FilePathsConfig,
    FileRetryConfig, FileSynthesisConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
