use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    // Target directory
    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("{}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    // Target directory or a single entry
    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    // Per-entry
    #[error("{}: vanished before it could be inspected", .0.display())]
    Vanished(PathBuf),

    #[error("{}: broken symbolic link", .0.display())]
    BrokenLink(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Config
    #[error("no directory to list")]
    MissingDirectory,

    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),

    // Runtime
    #[error("thread pool failure: {0}")]
    ThreadPool(String),
}

impl ListError {
    /// Map an I/O error on `path` where the directory itself is the subject.
    pub(crate) fn from_dir_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Map an I/O error from the metadata lookup of an already enumerated
    /// entry. A missing entry at this point means it went away mid-scan.
    pub(crate) fn from_entry_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::Vanished(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::PermissionDenied(p)
            | Self::Vanished(p)
            | Self::BrokenLink(p)
            | Self::Io { path: p, .. } => Some(p.as_path()),
            _ => None,
        }
    }

    /// Whether the listing can continue after this error.
    ///
    /// Recoverable errors belong to a single entry and are reported next to
    /// it. Everything else aborts the listing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_) | Self::Vanished(_) | Self::BrokenLink(_) | Self::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = ListError::NotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "/nope: no such file or directory");

        let err = ListError::Io {
            path: PathBuf::from("/x"),
            source: io::Error::other("boom"),
        };
        assert_eq!(err.to_string(), "/x: boom");
    }

    #[test]
    fn entry_not_found_is_vanished() {
        let err = ListError::from_entry_io(
            Path::new("/d/gone"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ListError::Vanished(_)));
        assert!(err.is_recoverable());
        assert_eq!(err.path(), Some(Path::new("/d/gone")));
    }

    #[test]
    fn dir_errors_keep_their_kind() {
        let nf = ListError::from_dir_io(Path::new("/d"), io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(nf, ListError::NotFound(_)));

        let pd = ListError::from_dir_io(
            Path::new("/d"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(pd, ListError::PermissionDenied(_)));
    }

    #[test]
    fn config_errors_are_fatal() {
        assert!(!ListError::MissingDirectory.is_recoverable());
        assert!(!ListError::InvalidThreadCount(0).is_recoverable());
        assert!(ListError::MissingDirectory.path().is_none());
    }
}
