//! Movie Renamer CLI
//!
//! Renames movie directories (and the video file inside) to "Title (Year)"
//! after confirming the TMDB match interactively.

use clap::Parser;
use movie_renamer::cli::{args::Cli, commands::rename};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env never override the real environment
    let _ = dotenvy::dotenv();

    // Parse command line arguments; usage errors exit with 1, help with 0
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    // Initialize logging
    init_logging(cli.verbose);

    rename::rename(&cli).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_renamer=debug")
    } else {
        EnvFilter::new("movie_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
