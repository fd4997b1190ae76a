//! Configuration model.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default language for TMDB responses.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default not-found report path.
pub const DEFAULT_REPORT_FILE: &str = "not_found.log";

/// Default HTML preview path.
pub const DEFAULT_PREVIEW_FILE: &str = "preview.html";

/// Default TMDB request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional settings read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbSettings,
    /// Not-found report path.
    pub report_file: Option<PathBuf>,
    /// HTML preview path.
    pub preview_file: Option<PathBuf>,
}

/// TMDB section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TmdbSettings {
    /// API key, used when `TMDB_API_KEY` is not set.
    pub api_key: Option<String>,
    /// Language for responses, used when neither `--LANG` nor `TMDB_LANG` is set.
    pub language: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            language: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Inclusive bounds on a directory's age in whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeBounds {
    pub min_days: Option<i64>,
    pub max_days: Option<i64>,
}

impl AgeBounds {
    pub fn is_unbounded(&self) -> bool {
        self.min_days.is_none() && self.max_days.is_none()
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Library root whose subdirectories are processed.
    pub dir: PathBuf,
    pub age: AgeBounds,
    pub dry_run: bool,
    pub preview: bool,
    pub report_file: PathBuf,
    pub preview_file: PathBuf,
    pub language: String,
    /// Maximum number of directories that reach the search step.
    pub limit: Option<usize>,
}

impl RunConfig {
    /// Settings with defaults for everything except the library root.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            age: AgeBounds::default(),
            dry_run: false,
            preview: false,
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            preview_file: PathBuf::from(DEFAULT_PREVIEW_FILE),
            language: DEFAULT_LANGUAGE.to_string(),
            limit: None,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_renamer")
}

/// Path of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from the user config directory.
pub fn load_config() -> Config {
    load_config_from(&default_config_path())
}

/// Load configuration from a file, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config file {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            Config::default()
        }
    }
}
