//! # parls
//!
//! List a directory, looking up every entry's metadata concurrently.
//!
//! The children of the target directory are enumerated once, then one
//! metadata lookup per entry runs on a worker pool. Outcomes come back in
//! enumeration order and stay attached to the entry that produced them, so a
//! failed lookup (an entry deleted mid-scan, a permission error) is reported
//! for that entry alone while every other entry is still listed.
//!
//! # Quick Start
//!
//! ```rust
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
//! std::fs::create_dir(dir.path().join("sub")).unwrap();
//!
//! let listing = parls::list().dir(dir.path()).run().unwrap();
//!
//! assert_eq!(listing.entries.len(), 2);
//! assert_eq!(listing.stats.files, 1);
//! assert_eq!(listing.stats.dirs, 1);
//! ```
//!
//! # Custom Probes
//!
//! Implement [`MetadataProbe`] to replace the filesystem lookup:
//!
//! ```rust
//! use parls::{Entry, EntryKind, ListError, MetadataProbe};
//!
//! struct EverythingIsAFile;
//!
//! impl MetadataProbe for EverythingIsAFile {
//!     fn probe(&self, _entry: &Entry) -> Result<EntryKind, ListError> {
//!         Ok(EntryKind::File)
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

pub mod render;

mod builder;
mod engine;
mod entry;
mod error;
mod probe;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ListBuilder;
pub use entry::{Entry, EntryKind, ListedEntry};
pub use error::ListError;
pub use probe::{FsProbe, MetadataProbe};
pub use results::{Listing, ScanStats};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ListBuilder`] to configure and run a listing.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir().unwrap();
///
/// let listing = parls::list().dir(dir.path()).threads(2).run().unwrap();
///
/// assert!(listing.is_empty());
/// ```
pub fn list() -> ListBuilder {
    ListBuilder::default()
}
