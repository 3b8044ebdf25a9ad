//! CLI command definitions

use clap::{Parser, ValueEnum};
use profiler_domain::SynthesisStrategy;
use std::path::PathBuf;

/// Output format for the finished profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Run summary followed by the profile
    Full,
    /// Only the profile text
    Profile,
}

/// Synthesis strategy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One request over all chunk analyses
    Freeform,
    /// Extract, merge and reformat each category separately
    CategoryWise,
}

impl From<StrategyArg> for SynthesisStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Freeform => SynthesisStrategy::Freeform,
            StrategyArg::CategoryWise => SynthesisStrategy::CategoryWise,
        }
    }
}

/// CLI arguments for comment-profiler
#[derive(Parser, Debug)]
#[command(name = "comment-profiler")]
#[command(author, version, about = "Build a psychological profile from a user's comment history")]
#[command(long_about = r#"
Comment Profiler reads an exported comment archive (<USERNAME>.html) and asks
a language model to build a profile of its author.

The process has two phases:
1. Analysis: the history is split into word-bounded chunks, each analyzed alone
2. Synthesis: the analyses are merged, freeform or category by category

Chunk analyses are cached in <USERNAME>_gpt_responses.csv and reused while
the comments and chunking stay the same.

Configuration files are loaded from (in priority order):
1. PROFILER_* environment variables
2. --config <path>       Explicit config file
3. ./profiler.toml       Project-level config
4. ~/.config/comment-profiler/config.toml   Global config

Example:
  comment-profiler spez
  comment-profiler spez --strategy category-wise --output-dir profiles
  comment-profiler spez --refresh --session-dir sessions -vv
"#)]
pub struct Cli {
    /// Username whose archive (<USERNAME>.html) is profiled
    #[arg(required_unless_present = "show_config")]
    pub username: Option<String>,

    /// Synthesis strategy (overrides config)
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Directory holding <USERNAME>.html (overrides config)
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory for caches and the profile (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Record every model session as JSON in this directory
    #[arg(long, value_name = "DIR")]
    pub session_dir: Option<PathBuf>,

    /// File holding the OpenAI API key (overrides config)
    #[arg(long, value_name = "PATH")]
    pub api_key_file: Option<PathBuf>,

    /// Ignore cached chunk analyses and category checkpoints
    #[arg(long)]
    pub refresh: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
