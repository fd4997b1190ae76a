//! Folder name generator.

use crate::models::media::SearchCandidate;

/// Generate the canonical movie folder name.
///
/// Format: `${title} (${year})`, where the year is taken verbatim from the
/// release date.
pub fn generate_movie_folder(candidate: &SearchCandidate) -> String {
    sanitize_filename(&format!("{} ({})", candidate.title, candidate.year()))
}

/// Sanitize a string for use in filenames.
fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
