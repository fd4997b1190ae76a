//! Command line argument definitions.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Movie Renamer - Rename movie directories to "Title (Year)" using TMDB
#[derive(Parser, Debug)]
#[command(name = "movie-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose subdirectories are renamed
    #[arg(long = "DIR", value_name = "PATH")]
    pub dir: PathBuf,

    /// Skip directories modified fewer than this many days ago
    #[arg(long = "MIN_AGE_DAYS", value_name = "DAYS")]
    pub min_age_days: Option<i64>,

    /// Skip directories modified more than this many days ago
    #[arg(long = "MAX_AGE_DAYS", value_name = "DAYS")]
    pub max_age_days: Option<i64>,

    /// Dry run - show what would be renamed
    #[arg(
        long = "DRY_RUN",
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub dry_run: bool,

    /// Write an HTML preview of the renames
    #[arg(
        long = "PREVIEW",
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub preview: bool,

    /// File that directories without search results are appended to [default: not_found.log]
    #[arg(long = "REPORT_FILE", value_name = "PATH")]
    pub report_file: Option<PathBuf>,

    /// Output path for the HTML preview [default: preview.html]
    #[arg(long = "PREVIEW_FILE", value_name = "PATH")]
    pub preview_file: Option<PathBuf>,

    /// Language for TMDB results [default: TMDB_LANG or en-US]
    #[arg(long = "LANG", value_name = "CODE")]
    pub lang: Option<String>,

    /// Stop after this many directories have been searched
    #[arg(long = "LIMIT_SEARCH", value_name = "N")]
    pub limit_search: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
