//! Directory scanner module.
//!
//! Lists the immediate subdirectories of the library root. Each one is a
//! candidate movie directory.

use crate::models::media::DirectoryEntry;
use crate::utils::fs::{ensure_directory, is_hidden};
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Build a directory entry, recording the modification time if readable.
fn create_directory_entry(entry: &walkdir::DirEntry) -> DirectoryEntry {
    let modified = entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .map(chrono::DateTime::<chrono::Utc>::from);

    DirectoryEntry {
        path: entry.path().to_path_buf(),
        name: entry.file_name().to_string_lossy().to_string(),
        modified,
    }
}

/// List candidate directories directly under `root`, sorted by name.
///
/// Hidden directories and plain files are ignored. Entries that cannot be
/// read are logged and left out.
pub fn scan_directories(root: &Path) -> Result<Vec<DirectoryEntry>> {
    ensure_directory(root)?;

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read directory entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() || is_hidden(entry.path()) {
            continue;
        }

        dirs.push(create_directory_entry(&entry));
    }

    tracing::debug!("Found {} candidate directories in {}", dirs.len(), root.display());
    Ok(dirs)
}

// Integration tests for scan_directories() live in tests/scanner_tests.rs
