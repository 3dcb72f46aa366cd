use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::error::ListError;

/// An immediate child of the listed directory.
///
/// `path` is always `dir.join(name)`; the two are fixed at enumeration time
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,

    /// Full path to the entry.
    pub path: PathBuf,
}

impl Entry {
    /// Build an entry for `name` inside `dir`.
    pub fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.join(&name);
        Self { name, path }
    }
}

/// The classification reported by a metadata lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link (only seen when links are not followed).
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    /// Classify filesystem metadata.
    pub fn from_metadata(md: &Metadata) -> Self {
        let ft = md.file_type();
        if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }

    /// `true` only for regular files. Directories, links and special files
    /// are all the negative case.
    pub fn is_file(self) -> bool {
        self == EntryKind::File
    }
}

/// One entry paired with the outcome of its own metadata lookup.
#[derive(Debug)]
pub struct ListedEntry {
    pub entry: Entry,
    pub outcome: Result<EntryKind, ListError>,
}

impl ListedEntry {
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.outcome.as_ref().ok().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_path_joins_dir_and_name() {
        let e = Entry::new(Path::new("/tmp/x"), "a.txt");
        assert_eq!(e.name, "a.txt");
        assert_eq!(e.path, PathBuf::from("/tmp/x/a.txt"));
    }

    #[test]
    fn only_files_are_files() {
        assert!(EntryKind::File.is_file());
        assert!(!EntryKind::Dir.is_file());
        assert!(!EntryKind::Symlink.is_file());
        assert!(!EntryKind::Other.is_file());
    }

    #[test]
    fn classifies_real_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, "x").unwrap();

        let md = std::fs::metadata(&file).unwrap();
        assert_eq!(EntryKind::from_metadata(&md), EntryKind::File);

        let md = std::fs::metadata(dir.path()).unwrap();
        assert_eq!(EntryKind::from_metadata(&md), EntryKind::Dir);
    }
}
