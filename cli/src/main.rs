//! CLI entrypoint for Comment Profiler
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use profiler_application::{BuildProfileInput, BuildProfileUseCase, PipelineConfig};
use profiler_infrastructure::{
    ConfigLoader, CsvArtifactStore, FileConfig, HtmlCommentSource, JsonSessionStore,
    OpenAiGateway, read_api_key,
};
use profiler_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressMode};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(username) = cli.username.clone() else {
        bail!("USERNAME is required");
    };

    info!("Starting Comment Profiler");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    let config = resolve_pipeline_config(&file_config, &cli)?;

    let input_dir = cli
        .input_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&file_config.paths.input_dir));
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&file_config.paths.output_dir));
    let session_dir = cli
        .session_dir
        .clone()
        .or_else(|| file_config.paths.session_dir.as_ref().map(PathBuf::from));
    let key_file = cli
        .api_key_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&file_config.openai.api_key_file));

    let api_key = read_api_key(&key_file)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::new(
        api_key,
        file_config.openai.base_url.clone(),
        file_config.openai.timeout(),
    )?);
    let source = Arc::new(HtmlCommentSource::new(input_dir));
    let artifacts = Arc::new(CsvArtifactStore::new(output_dir));

    let mut use_case = BuildProfileUseCase::new(source, artifacts, gateway, config);
    if let Some(dir) = session_dir {
        info!("Recording sessions to {}", dir.display());
        use_case = use_case.with_session_store(Arc::new(JsonSessionStore::new(dir)));
    }

    if !cli.quiet && cli.output == OutputFormat::Full {
        println!();
        println!("Profiling: {}", username);
        println!(
            "Models: {} (analysis), {} (editing)",
            use_case.config().models.full,
            use_case.config().models.mini
        );
        println!("Strategy: {}", use_case.config().strategy);
        println!();
    }

    let progress = ProgressMode::select(cli.quiet, std::io::stderr().is_terminal()).notifier();

    let input = BuildProfileInput::new(username).with_refresh(cli.refresh);
    let report = use_case.execute(input, progress.as_ref()).await?;

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Profile => ConsoleFormatter::format_profile_only(&report),
    };
    print!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level, to stderr or a log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Validate the loaded file config and apply CLI overrides on top of it
fn resolve_pipeline_config(file_config: &FileConfig, cli: &Cli) -> Result<PipelineConfig> {
    let issues = file_config.validate();
    let mut errors = Vec::new();
    for issue in &issues {
        if issue.is_error() {
            errors.push(issue.message.clone());
        } else {
            warn!("{}", issue.message);
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let mut config = file_config.to_pipeline_config();
    if let Some(strategy) = cli.strategy {
        config = config.with_strategy(strategy.into());
    }
    Ok(config)
}
