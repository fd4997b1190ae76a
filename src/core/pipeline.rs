//! Directory processing pipeline.
//!
//! For each subdirectory of the library root, in name order:
//! filter -> search -> rank -> choose -> rename -> report.
//! Everything runs sequentially; a search failure aborts the run.

use crate::core::filter::{check_age, check_name};
use crate::core::ranker::rank;
use crate::core::renamer;
use crate::core::report::RunReport;
use crate::core::scanner::scan_directories;
use crate::core::selector::Chooser;
use crate::generators::folder::generate_movie_folder;
use crate::models::config::RunConfig;
use crate::models::media::{DirectoryEntry, RenamePlan, Selection};
use crate::services::tmdb::{poster_url, MovieSearch};
use crate::Result;
use chrono::{DateTime, Utc};

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories looked at.
    pub scanned: usize,
    /// Skipped by the age or name filter.
    pub filtered: usize,
    /// Directories that reached the search step.
    pub searched: usize,
    pub not_found: usize,
    /// Skipped at the selection prompt.
    pub skipped: usize,
    /// Renamed, or would be under dry run.
    pub renamed: usize,
    /// Selected, but the directory was left where it was.
    pub unchanged: usize,
    /// Whether the search limit stopped the run early.
    pub limit_reached: bool,
}

/// Drives one run over a library root.
pub struct Pipeline<'a, S: ?Sized, C: ?Sized> {
    config: &'a RunConfig,
    search: &'a S,
    chooser: &'a mut C,
    report: RunReport,
    summary: RunSummary,
}

impl<'a, S, C> Pipeline<'a, S, C>
where
    S: MovieSearch + ?Sized,
    C: Chooser + ?Sized,
{
    pub fn new(config: &'a RunConfig, search: &'a S, chooser: &'a mut C) -> Self {
        let preview_file = config.preview.then(|| config.preview_file.clone());
        Self {
            config,
            search,
            chooser,
            report: RunReport::new(config.report_file.clone(), preview_file),
            summary: RunSummary::default(),
        }
    }

    /// Process every candidate directory, then flush the report.
    ///
    /// The report is flushed even when processing fails part way; the
    /// processing error is returned afterwards.
    pub async fn run(mut self) -> Result<RunSummary> {
        let result = self.process_all(Utc::now()).await;

        match (result, self.report.flush()) {
            (Ok(()), Ok(())) => Ok(self.summary),
            (Ok(()), Err(e)) => Err(e),
            (Err(e), flushed) => {
                if let Err(flush_err) = flushed {
                    tracing::error!("Failed to write report: {}", flush_err);
                }
                Err(e)
            }
        }
    }

    async fn process_all(&mut self, now: DateTime<Utc>) -> Result<()> {
        let entries = scan_directories(&self.config.dir)?;
        tracing::info!(
            "Found {} directories in {}",
            entries.len(),
            self.config.dir.display()
        );

        for entry in entries {
            self.summary.scanned += 1;

            if check_name(&entry).is_skip() || check_age(&entry, now, &self.config.age).is_skip() {
                self.summary.filtered += 1;
                continue;
            }

            if let Some(limit) = self.config.limit {
                if self.summary.searched >= limit {
                    tracing::info!("Search limit of {} reached, stopping", limit);
                    self.summary.limit_reached = true;
                    break;
                }
            }

            self.summary.searched += 1;
            self.process_entry(&entry).await?;
        }

        Ok(())
    }

    async fn process_entry(&mut self, entry: &DirectoryEntry) -> Result<()> {
        tracing::info!("Searching TMDB for {:?}", entry.name);
        let results = self
            .search
            .search_movies(&entry.name, &self.config.language)
            .await?;

        let shortlist = rank(results);
        if shortlist.is_empty() {
            tracing::warn!("No results for {:?}", entry.name);
            self.report.record_not_found(&entry.name);
            self.summary.not_found += 1;
            return Ok(());
        }

        let candidate = match self.chooser.choose(&entry.name, &shortlist)? {
            Selection::Selected(index) => shortlist.get(index),
            Selection::Skipped => None,
        };
        let Some(candidate) = candidate else {
            self.summary.skipped += 1;
            return Ok(());
        };

        let plan = RenamePlan::new(
            entry.path.clone(),
            entry.name.clone(),
            generate_movie_folder(candidate),
        );
        let outcome = renamer::apply(&plan, self.config.dry_run)?;
        if !outcome.directory_outcome.is_rename() {
            tracing::debug!(
                "{:?} left in place ({:?})",
                entry.name,
                outcome.directory_outcome
            );
            self.summary.unchanged += 1;
            return Ok(());
        }

        self.report.record_preview(
            &plan.source_name,
            &plan.target_name,
            &candidate.overview,
            &poster_url(&candidate.poster_path),
        );
        self.summary.renamed += 1;
        Ok(())
    }
}

/// Run the pipeline once (convenience function).
pub async fn run_pipeline<S, C>(config: &RunConfig, search: &S, chooser: &mut C) -> Result<RunSummary>
where
    S: MovieSearch + ?Sized,
    C: Chooser + ?Sized,
{
    Pipeline::new(config, search, chooser).run().await
}
