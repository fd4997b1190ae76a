//! Rename coordinator.
//!
//! Applies a [`RenamePlan`] in two steps:
//! 1. Rename `<old name>.<ext>` video files inside the directory
//! 2. Rename the directory itself
//!
//! Existing destination files are never overwritten. An existing
//! destination directory aborts the run.

use crate::models::media::{DirectoryOutcome, FileOutcome, FileRename, RenameOutcome, RenamePlan};
use crate::utils::fs::get_extension;
use crate::Result;
use std::fs;

/// Video extensions checked for the main movie file.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "m4v", "wmv", "flv", "webm"];

/// Find video files named after the directory, one per matching extension.
///
/// Extensions match case-insensitively and keep their original spelling in
/// the new name.
pub fn find_video_files(plan: &RenamePlan) -> Result<Vec<FileRename>> {
    let mut found: Vec<(usize, FileRename)> = Vec::new();

    for entry in fs::read_dir(&plan.source_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let stem_matches = path
            .file_stem()
            .map(|s| s.to_string_lossy() == plan.source_name.as_str())
            .unwrap_or(false);
        if !stem_matches {
            continue;
        }

        let Some(rank) = get_extension(&path)
            .and_then(|ext| VIDEO_EXTENSIONS.iter().position(|v| *v == ext))
        else {
            continue;
        };

        // get_extension lowercases; reuse the on-disk spelling for the target
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let to = plan
            .source_dir
            .join(format!("{}.{}", plan.target_name, ext));
        found.push((rank, FileRename { from: path, to }));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.from.cmp(&b.1.from)));
    Ok(found.into_iter().map(|(_, rename)| rename).collect())
}

fn rename_file(rename: FileRename, dry_run: bool) -> Result<FileOutcome> {
    if rename.to.exists() {
        tracing::warn!(
            "File already exists, not overwriting: {}",
            rename.to.display()
        );
        return Ok(FileOutcome::SkippedExisting(rename));
    }

    if dry_run {
        tracing::info!(
            "[DRY RUN] Would rename file {} -> {}",
            rename.from.display(),
            rename.to.display()
        );
        return Ok(FileOutcome::WouldRename(rename));
    }

    fs::rename(&rename.from, &rename.to)?;
    tracing::info!(
        "Renamed file {} -> {}",
        rename.from.display(),
        rename.to.display()
    );
    Ok(FileOutcome::Renamed(rename))
}

/// Apply a rename plan: matching video files first, then the directory.
pub fn apply(plan: &RenamePlan, dry_run: bool) -> Result<RenameOutcome> {
    let target_dir = plan.target_dir();

    if !plan.source_dir.is_dir() {
        tracing::warn!(
            "Directory no longer exists, nothing to rename: {}",
            plan.source_dir.display()
        );
        return Ok(RenameOutcome {
            files: Vec::new(),
            directory: plan.source_dir.clone(),
            directory_outcome: DirectoryOutcome::SourceMissing,
        });
    }

    let mut files = Vec::new();
    for rename in find_video_files(plan)? {
        files.push(rename_file(rename, dry_run)?);
    }

    if target_dir == plan.source_dir {
        tracing::info!("Directory already named {}", plan.target_name);
        return Ok(RenameOutcome {
            files,
            directory: target_dir,
            directory_outcome: DirectoryOutcome::AlreadyNamed,
        });
    }

    if target_dir.exists() {
        if dry_run {
            tracing::warn!(
                "[DRY RUN] Directory rename would fail, destination exists: {}",
                target_dir.display()
            );
            return Ok(RenameOutcome {
                files,
                directory: target_dir,
                directory_outcome: DirectoryOutcome::DestinationExists,
            });
        }
        return Err(crate::Error::DirectoryExists(target_dir.display().to_string()));
    }

    if dry_run {
        tracing::info!(
            "[DRY RUN] Would rename directory {} -> {}",
            plan.source_name,
            plan.target_name
        );
        return Ok(RenameOutcome {
            files,
            directory: target_dir,
            directory_outcome: DirectoryOutcome::WouldRename,
        });
    }

    fs::rename(&plan.source_dir, &target_dir)?;
    tracing::info!(
        "Renamed directory {} -> {}",
        plan.source_name,
        plan.target_name
    );

    Ok(RenameOutcome {
        files,
        directory: target_dir,
        directory_outcome: DirectoryOutcome::Renamed,
    })
}

// Filesystem tests for apply() live in tests/renamer_tests.rs
