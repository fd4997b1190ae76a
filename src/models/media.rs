//! Media-related data models.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// A candidate directory found directly under the library root.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Full path to the directory.
    pub path: PathBuf,
    /// Directory name without path.
    pub name: String,
    /// Last modified time, if it could be read.
    pub modified: Option<DateTime<Utc>>,
}

/// A single movie returned by a metadata search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCandidate {
    pub title: String,
    /// Release date as reported upstream (`YYYY-MM-DD` or empty).
    pub release_date: String,
    pub popularity: f64,
    pub overview: String,
    /// Poster path relative to the image host (may be empty).
    pub poster_path: String,
}

impl SearchCandidate {
    /// The first four characters of the release date, passed through as-is.
    ///
    /// Malformed upstream dates are not validated, so this may be shorter
    /// than four characters or non-numeric.
    pub fn year(&self) -> String {
        self.release_date.chars().take(4).collect()
    }

    /// Year shown in the selection prompt: empty unless a full four
    /// characters are available.
    pub fn display_year(&self) -> String {
        if self.release_date.chars().count() < 4 {
            String::new()
        } else {
            self.year()
        }
    }
}

/// Popularity-ranked top of a search result set.
///
/// Only built through [`crate::core::ranker::rank`], which guarantees the
/// length bound and the ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shortlist {
    candidates: Vec<SearchCandidate>,
}

impl Shortlist {
    /// Maximum number of candidates offered to the user.
    pub const MAX_LEN: usize = 5;

    pub(crate) fn from_ranked(candidates: Vec<SearchCandidate>) -> Self {
        debug_assert!(candidates.len() <= Self::MAX_LEN);
        Self { candidates }
    }

    pub fn candidates(&self) -> &[SearchCandidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&SearchCandidate> {
        self.candidates.get(index)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Outcome of asking the user to pick from a shortlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the shortlist.
    Selected(usize),
    Skipped,
}

/// A coordinated rename of a directory and its main video file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenamePlan {
    /// Directory being renamed.
    pub source_dir: PathBuf,
    /// Current directory name.
    pub source_name: String,
    /// Canonical `Title (Year)` name.
    pub target_name: String,
}

impl RenamePlan {
    pub fn new(source_dir: PathBuf, source_name: String, target_name: String) -> Self {
        Self {
            source_dir,
            source_name,
            target_name,
        }
    }

    /// Directory that holds the source directory.
    pub fn parent(&self) -> &Path {
        self.source_dir.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Full path of the renamed directory.
    pub fn target_dir(&self) -> PathBuf {
        self.parent().join(&self.target_name)
    }
}

/// A single video file rename inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// What happened to one video file during a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed(FileRename),
    WouldRename(FileRename),
    /// Destination already present; left untouched.
    SkippedExisting(FileRename),
}

/// What happened to the directory itself during a rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Renamed,
    WouldRename,
    /// Source already carries the target name.
    AlreadyNamed,
    /// Dry run only; a real run fails instead.
    DestinationExists,
    /// Source directory disappeared before the rename.
    SourceMissing,
}

impl DirectoryOutcome {
    /// True when the directory was, or under dry run would be, moved.
    pub fn is_rename(self) -> bool {
        matches!(self, Self::Renamed | Self::WouldRename)
    }
}

/// Result of applying a [`RenamePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub files: Vec<FileOutcome>,
    /// Final directory path (the intended one under dry run).
    pub directory: PathBuf,
    pub directory_outcome: DirectoryOutcome,
}

impl RenameOutcome {
    /// Number of filesystem mutations performed.
    pub fn mutations(&self) -> usize {
        let files = self
            .files
            .iter()
            .filter(|f| matches!(f, FileOutcome::Renamed(_)))
            .count();
        files + usize::from(self.directory_outcome == DirectoryOutcome::Renamed)
    }
}
