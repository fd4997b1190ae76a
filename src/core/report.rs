//! Run report.
//!
//! Collects directories with no search results and, in preview mode, one row
//! per rename. Nothing is written until [`RunReport::flush`].

use crate::generators::preview::generate_preview_html;
use crate::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// One rename shown in the HTML preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub old_name: String,
    pub new_name: String,
    pub overview: String,
    pub poster_url: String,
}

/// Accumulated end-of-run output.
#[derive(Debug)]
pub struct RunReport {
    report_file: PathBuf,
    /// `Some` when preview mode is on.
    preview_file: Option<PathBuf>,
    not_found: Vec<String>,
    previews: Vec<PreviewRow>,
}

impl RunReport {
    /// Create a report; pass a preview path to enable preview mode.
    pub fn new(report_file: impl Into<PathBuf>, preview_file: Option<PathBuf>) -> Self {
        Self {
            report_file: report_file.into(),
            preview_file,
            not_found: Vec::new(),
            previews: Vec::new(),
        }
    }

    pub fn record_not_found(&mut self, name: &str) {
        self.not_found.push(name.to_string());
    }

    /// Record a rename for the preview. Ignored unless preview mode is on.
    pub fn record_preview(&mut self, old_name: &str, new_name: &str, overview: &str, poster_url: &str) {
        if self.preview_file.is_none() {
            return;
        }
        self.previews.push(PreviewRow {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            overview: overview.to_string(),
            poster_url: poster_url.to_string(),
        });
    }

    pub fn previews(&self) -> &[PreviewRow] {
        &self.previews
    }

    /// Append not-found names to the report file and write the preview page.
    pub fn flush(&self) -> Result<()> {
        if !self.not_found.is_empty() {
            if let Some(parent) = self.report_file.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.report_file)?;
            for name in &self.not_found {
                writeln!(file, "{}", name)?;
            }
            tracing::info!(
                "{} not found entries appended to {}",
                self.not_found.len(),
                self.report_file.display()
            );
        }

        if let Some(ref preview_file) = self.preview_file {
            fs::write(preview_file, generate_preview_html(&self.previews))?;
            tracing::info!("Preview written to {}", preview_file.display());
        }

        Ok(())
    }
}
