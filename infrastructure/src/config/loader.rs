//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["profiler.toml", ".profiler.toml"];

/// Prefix of environment overrides, e.g. `PROFILER_RETRY__MAX_RETRIES=3`
pub const ENV_PREFIX: &str = "PROFILER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `PROFILER_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./profiler.toml` or `./.profiler.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/comment-profiler/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Merge defaults with whichever of the given files exist
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path is merged even if missing so a typo is reported
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/comment-profiler/config.toml if set,
    /// otherwise falls back to ~/.config/comment-profiler/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("comment-profiler").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./profiler.toml or ./.profiler.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profiler_domain::SynthesisStrategy;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.chunking.max_words_per_chunk, 10_000);
        assert_eq!(config.synthesis.strategy, "freeform");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("comment-profiler"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(
            &global,
            "[chunking]\nmax_words_per_chunk = 1000\nslack_words = 7\n[retry]\nmax_retries = 9\n",
        )
        .unwrap();
        std::fs::write(&project, "[chunking]\nmax_words_per_chunk = 2000\n").unwrap();
        std::fs::write(&explicit, "[synthesis]\nstrategy = \"category-wise\"\n").unwrap();

        let config: FileConfig =
            ConfigLoader::figment(Some(&global), Some(&project), Some(&explicit))
                .extract()
                .unwrap();

        assert_eq!(config.chunking.max_words_per_chunk, 2000);
        assert_eq!(config.chunking.slack_words, 7);
        assert_eq!(config.retry.max_retries, 9);
        assert_eq!(
            config.to_pipeline_config().strategy,
            SynthesisStrategy::CategoryWise
        );
        // untouched sections keep defaults
        assert_eq!(config.openai.timeout_secs, 300);
    }

    #[test]
    fn test_missing_optional_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");

        let config: FileConfig = ConfigLoader::figment(Some(&absent), Some(&absent), None)
            .extract()
            .unwrap();

        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&absent)).extract();

        assert!(result.is_err());
    }
}
