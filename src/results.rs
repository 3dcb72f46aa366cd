use std::time::Duration;

use crate::entry::{EntryKind, ListedEntry};
use crate::error::ListError;

/// The output of a completed listing.
///
/// `entries` is in enumeration order. Every enumerated entry appears exactly
/// once, whether its lookup succeeded or not.
#[derive(Debug)]
pub struct Listing {
    /// Each entry with the outcome of its own lookup.
    pub entries: Vec<ListedEntry>,

    /// Counts and timing.
    pub stats: ScanStats,
}

impl Listing {
    pub(crate) fn new(entries: Vec<ListedEntry>, duration: Duration) -> Self {
        let stats = ScanStats::compute(&entries, duration);
        Self { entries, stats }
    }

    /// Entry names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ListedEntry::name)
    }

    /// Per-entry failures, in enumeration order.
    pub fn errors(&self) -> impl Iterator<Item = &ListError> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().err())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts for a completed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files.
    pub files: usize,

    /// Directories.
    pub dirs: usize,

    /// Symlinks and special files.
    pub others: usize,

    /// Entries whose lookup failed.
    pub failed: usize,

    /// Wall-clock time from enumeration start to the last lookup finishing.
    pub duration: Duration,
}

impl ScanStats {
    pub(crate) fn compute(entries: &[ListedEntry], duration: Duration) -> Self {
        let mut stats = Self {
            files: 0,
            dirs: 0,
            others: 0,
            failed: 0,
            duration,
        };
        for e in entries {
            match e.kind() {
                Some(EntryKind::File) => stats.files += 1,
                Some(EntryKind::Dir) => stats.dirs += 1,
                Some(_) => stats.others += 1,
                None => stats.failed += 1,
            }
        }
        stats
    }
}
