//! Presentation layer for comment-profiler
//!
//! This crate contains CLI definitions, the console formatter
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, StrategyArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
