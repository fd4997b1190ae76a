//! Rename command implementation.
//!
//! Resolves settings from the command line, environment and config file,
//! then runs the pipeline against TMDB with an interactive prompt.

use crate::cli::args::Cli;
use crate::core::pipeline::{run_pipeline, RunSummary};
use crate::core::selector::TerminalChooser;
use crate::models::config::{
    self, AgeBounds, Config, RunConfig, DEFAULT_LANGUAGE, DEFAULT_PREVIEW_FILE, DEFAULT_REPORT_FILE,
};
use crate::services::tmdb::{TmdbClient, TmdbConfig};
use crate::utils::fs::ensure_directory;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Values read from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub api_key: Option<String>,
    pub language: Option<String>,
}

impl EnvSettings {
    /// Read `TMDB_API_KEY` and `TMDB_LANG`, treating empty values as unset.
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: read("TMDB_API_KEY"),
            language: read("TMDB_LANG"),
        }
    }
}

/// Merge CLI flags, environment and config file into run settings.
///
/// Precedence: command line, then environment, then config file, then
/// built-in defaults.
pub fn resolve_settings(cli: &Cli, env: &EnvSettings, file: &Config) -> Result<(RunConfig, TmdbConfig)> {
    ensure_directory(&cli.dir)?;

    let api_key = env
        .api_key
        .clone()
        .or_else(|| file.tmdb.api_key.clone())
        .ok_or(crate::Error::TmdbApiKeyMissing)?;

    if let (Some(min), Some(max)) = (cli.min_age_days, cli.max_age_days) {
        if min > max {
            return Err(crate::Error::InvalidConfig(format!(
                "--MIN_AGE_DAYS ({}) is greater than --MAX_AGE_DAYS ({})",
                min, max
            )));
        }
    }

    let language = cli
        .lang
        .clone()
        .or_else(|| env.language.clone())
        .or_else(|| file.tmdb.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let run_config = RunConfig {
        dir: cli.dir.clone(),
        age: AgeBounds {
            min_days: cli.min_age_days,
            max_days: cli.max_age_days,
        },
        dry_run: cli.dry_run,
        preview: cli.preview,
        report_file: cli
            .report_file
            .clone()
            .or_else(|| file.report_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE)),
        preview_file: cli
            .preview_file
            .clone()
            .or_else(|| file.preview_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREVIEW_FILE)),
        language,
        limit: cli.limit_search,
    };

    let tmdb_config = TmdbConfig::new(api_key, Duration::from_secs(file.tmdb.timeout));
    Ok((run_config, tmdb_config))
}

/// Execute the rename command.
pub async fn rename(cli: &Cli) -> Result<()> {
    let file_config = config::load_config();
    let (run_config, tmdb_config) = resolve_settings(cli, &EnvSettings::from_env(), &file_config)?;

    if run_config.dry_run {
        println!("{}", "[DRY-RUN] No changes will be made".bold().yellow());
    } else {
        println!("{}", "Renaming movie directories...".bold().cyan());
    }
    println!();

    // Print configuration
    println!("  {} {}", "Directory:".bold(), run_config.dir.display());
    println!("  {} {}", "Language:".bold(), run_config.language);
    if let Some(limit) = run_config.limit {
        println!("  {} {}", "Search limit:".bold(), limit);
    }
    println!();

    let client = TmdbClient::new(tmdb_config)?;
    let mut chooser = TerminalChooser::stdio();
    let summary = run_pipeline(&run_config, &client, &mut chooser).await?;

    print_summary(&summary, &run_config);
    Ok(())
}

/// Print the end-of-run summary.
fn print_summary(summary: &RunSummary, run_config: &RunConfig) {
    println!();
    println!("{}", "Summary".bold().green());
    println!("  {} {}", "Directories scanned:".bold(), summary.scanned);
    println!("  {} {}", "Filtered out:".bold(), summary.filtered);
    println!("  {} {}", "Searched:".bold(), summary.searched);
    println!("  {} {}", "Not found:".bold(), summary.not_found);
    println!("  {} {}", "Skipped:".bold(), summary.skipped);
    if run_config.dry_run {
        println!("  {} {}", "Would rename:".bold(), summary.renamed);
    } else {
        println!("  {} {}", "Renamed:".bold(), summary.renamed);
    }
    if summary.unchanged > 0 {
        println!("  {} {}", "Left unchanged:".bold(), summary.unchanged);
    }

    if summary.limit_reached {
        println!();
        println!(
            "{}",
            format!("Stopped after {} searches (--LIMIT_SEARCH)", summary.searched).yellow()
        );
    }

    if summary.not_found > 0 {
        println!();
        println!(
            "{} {}",
            "Not found entries appended to:".bold(),
            run_config.report_file.display()
        );
    }

    if run_config.preview {
        println!(
            "{} {}",
            "Preview written to:".bold(),
            run_config.preview_file.display()
        );
    }
}
