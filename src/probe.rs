use std::fs;

use crate::entry::{Entry, EntryKind};
use crate::error::ListError;

/// Looks up the classification of a single entry.
///
/// Implement this to replace the filesystem lookup, e.g. to inject failures
/// or delays in tests.
///
/// # Thread Safety
///
/// `Send + Sync` are required: one probe is shared by every worker thread
/// and called concurrently on different entries.
///
/// # Error Handling
///
/// A failed lookup is returned as `Err` for that entry only. The engine
/// stores it next to the entry and keeps going with the others.
pub trait MetadataProbe: Send + Sync {
    /// Classify `entry`. Must not depend on any other entry's lookup.
    fn probe(&self, entry: &Entry) -> Result<EntryKind, ListError>;
}

/// The default probe: one `lstat` (or `stat` when following links) per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe {
    follow_links: bool,
}

impl FsProbe {
    pub fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }
}

impl MetadataProbe for FsProbe {
    fn probe(&self, entry: &Entry) -> Result<EntryKind, ListError> {
        if !self.follow_links {
            return fs::symlink_metadata(&entry.path)
                .map(|md| EntryKind::from_metadata(&md))
                .map_err(|e| ListError::from_entry_io(&entry.path, e));
        }

        match fs::metadata(&entry.path) {
            Ok(md) => Ok(EntryKind::from_metadata(&md)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // The link itself may still be there with nothing behind it
                match fs::symlink_metadata(&entry.path) {
                    Ok(md) if md.file_type().is_symlink() => {
                        Err(ListError::BrokenLink(entry.path.clone()))
                    }
                    _ => Err(ListError::from_entry_io(&entry.path, e)),
                }
            }
            Err(e) => Err(ListError::from_entry_io(&entry.path, e)),
        }
    }
}
