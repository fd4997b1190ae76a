//! Directory filters applied before any search.
//!
//! - Age: keep only directories whose age in days lies in an inclusive range
//! - Name: skip directories that already carry a `(YYYY)` tag

use crate::models::config::AgeBounds;
use crate::models::media::DirectoryEntry;
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Result of running a filter over a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    Skip,
}

impl FilterDecision {
    pub fn is_skip(self) -> bool {
        self == FilterDecision::Skip
    }
}

/// Age in whole days, rounded down.
pub fn age_in_days(modified: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - modified).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Decide on a known age against inclusive bounds.
pub fn check_age_days(age_days: i64, bounds: &AgeBounds) -> FilterDecision {
    if let Some(min) = bounds.min_days {
        if age_days < min {
            return FilterDecision::Skip;
        }
    }
    if let Some(max) = bounds.max_days {
        if age_days > max {
            return FilterDecision::Skip;
        }
    }
    FilterDecision::Keep
}

/// Age filter for a directory entry.
///
/// With no bounds set every directory is kept without looking at its
/// modification time. An unreadable modification time is a skip.
pub fn check_age(entry: &DirectoryEntry, now: DateTime<Utc>, bounds: &AgeBounds) -> FilterDecision {
    if bounds.is_unbounded() {
        return FilterDecision::Keep;
    }

    let Some(modified) = entry.modified else {
        tracing::warn!(
            "Cannot read modification time of {}, skipping",
            entry.path.display()
        );
        return FilterDecision::Skip;
    };

    let age = age_in_days(modified, now);
    let decision = check_age_days(age, bounds);
    if decision.is_skip() {
        tracing::info!("Skipping {} (age {} days out of range)", entry.name, age);
    }
    decision
}

/// Whether a name already contains a parenthesized four-digit year.
pub fn has_year_tag(name: &str) -> bool {
    regex::Regex::new(r"\([0-9]{4}\)")
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Name filter: already canonical directories are skipped.
pub fn check_name(entry: &DirectoryEntry) -> FilterDecision {
    if has_year_tag(&entry.name) {
        tracing::info!("Skipping {} (already has a year)", entry.name);
        FilterDecision::Skip
    } else {
        FilterDecision::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::path::PathBuf;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn entry(name: &str, modified: Option<DateTime<Utc>>) -> DirectoryEntry {
        DirectoryEntry {
            path: PathBuf::from("/movies").join(name),
            name: name.to_string(),
            modified,
        }
    }

    fn bounds(min: Option<i64>, max: Option<i64>) -> AgeBounds {
        AgeBounds {
            min_days: min,
            max_days: max,
        }
    }

    #[test]
    fn test_age_in_days_floors() {
        let now = now();
        assert_eq!(age_in_days(now, now), 0);
        assert_eq!(age_in_days(now - Duration::hours(23), now), 0);
        assert_eq!(age_in_days(now - Duration::hours(24), now), 1);
        assert_eq!(age_in_days(now - Duration::hours(71), now), 2);
        // Modified in the future
        assert_eq!(age_in_days(now + Duration::hours(1), now), -1);
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let b = bounds(Some(2), Some(5));
        assert_eq!(check_age_days(1, &b), FilterDecision::Skip);
        assert_eq!(check_age_days(2, &b), FilterDecision::Keep);
        assert_eq!(check_age_days(5, &b), FilterDecision::Keep);
        assert_eq!(check_age_days(6, &b), FilterDecision::Skip);
    }

    #[test]
    fn test_age_keep_matches_bounds_formula() {
        let options = [None, Some(0), Some(3), Some(10)];
        for min in options {
            for max in options {
                for age in -1..=12 {
                    let expected = min.map_or(true, |m| age >= m) && max.map_or(true, |m| age <= m);
                    let kept = check_age_days(age, &bounds(min, max)) == FilterDecision::Keep;
                    assert_eq!(kept, expected, "min={:?} max={:?} age={}", min, max, age);
                }
            }
        }
    }

    #[test]
    fn test_unbounded_keeps_unreadable_mtime() {
        let e = entry("Terminator", None);
        assert_eq!(check_age(&e, now(), &AgeBounds::default()), FilterDecision::Keep);
    }

    #[test]
    fn test_unreadable_mtime_is_skipped_when_bounded() {
        let e = entry("Terminator", None);
        assert_eq!(
            check_age(&e, now(), &bounds(Some(1), None)),
            FilterDecision::Skip
        );
    }

    #[test]
    fn test_check_age_uses_entry_mtime() {
        let e = entry("Terminator", Some(now() - Duration::days(10)));
        assert_eq!(check_age(&e, now(), &bounds(None, Some(7))), FilterDecision::Skip);
        assert_eq!(check_age(&e, now(), &bounds(Some(7), None)), FilterDecision::Keep);
    }

    #[test]
    fn test_has_year_tag() {
        assert!(has_year_tag("The Foo (1999)"));
        assert!(has_year_tag("(2001) Odyssey"));
        assert!(!has_year_tag("Terminator"));
        assert!(!has_year_tag("Blade Runner 2049"));
        assert!(!has_year_tag("Movie [1999]"));
        assert!(!has_year_tag("Movie (99)"));
        assert!(!has_year_tag("Movie (19999)"));
    }

    #[test]
    fn test_check_name() {
        assert!(check_name(&entry("The Foo (1999)", None)).is_skip());
        assert!(!check_name(&entry("Unknown Film XYZ", None)).is_skip());
    }
}
