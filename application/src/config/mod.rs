//! Application-level configuration.
//!
//! - [`PipelineConfig`]: chunk sizing, model roles, retry limits and strategy
//! - [`RetryPolicy`]: recovery limits for a single reply request

pub mod pipeline_config;

pub use pipeline_config::{ChunkingParams, ModelRoles, PipelineConfig, RetryPolicy};
