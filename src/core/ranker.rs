//! Candidate ranking.

use crate::models::media::{SearchCandidate, Shortlist};
use std::cmp::Ordering;

/// Sort by popularity (highest first) and keep the top [`Shortlist::MAX_LEN`].
///
/// The sort is stable, so equally popular candidates keep their upstream
/// order. An empty input yields an empty shortlist.
pub fn rank(mut candidates: Vec<SearchCandidate>) -> Shortlist {
    candidates.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(Shortlist::MAX_LEN);
    Shortlist::from_ranked(candidates)
}
