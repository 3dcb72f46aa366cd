use std::path::PathBuf;

use crate::engine::{EngineOptions, WalkConfig, run};
use crate::error::ListError;
use crate::probe::{FsProbe, MetadataProbe};
use crate::results::Listing;

// ---------------------------------------------------------------------------
// ListBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and running a listing.
///
/// Created via [`parls::list()`](crate::list). Configure with chained
/// builder methods, then call [`run()`](ListBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let listing = parls::list()
///     .dir("/var/log")
///     .threads(8)
///     .follow_links(true)
///     .run()?;
/// ```
pub struct ListBuilder {
    dir:          Option<PathBuf>,
    probe:        Option<Box<dyn MetadataProbe>>,
    threads:      usize,
    follow_links: bool,
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self {
            dir:          None,
            probe:        None,
            threads:      num_cpus(),
            follow_links: false,
        }
    }
}

impl ListBuilder {
    // ── Target ────────────────────────────────────────────────────────────

    /// Set the directory whose immediate children are listed.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Replace the filesystem lookup with a custom [`MetadataProbe`].
    ///
    /// When set, `.follow_links()` has no effect; the probe decides how
    /// links are classified.
    pub fn probe(mut self, p: impl MetadataProbe + 'static) -> Self {
        self.probe = Some(Box::new(p));
        self
    }

    /// Classify symlinks by the type of their target instead of as links.
    ///
    /// Off by default. A link whose target is missing then reports
    /// [`ListError::BrokenLink`].
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Number of worker threads running metadata lookups.
    ///
    /// Defaults to the number of logical CPU cores. Must be at least 1.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = n;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Run the listing and return every entry with its lookup outcome.
    ///
    /// Blocks until all lookups have finished.
    ///
    /// # Errors
    ///
    /// Returns `Err` for configuration errors (no directory, zero threads),
    /// thread pool failure, or when the directory itself cannot be read.
    /// Per-entry failures are returned inside the [`Listing`].
    pub fn run(self) -> Result<Listing, ListError> {
        let dir = self.dir.ok_or(ListError::MissingDirectory)?;

        if self.threads == 0 {
            return Err(ListError::InvalidThreadCount(self.threads));
        }

        let probe: Box<dyn MetadataProbe> = match self.probe {
            Some(p) => p,
            None    => Box::new(FsProbe::new(self.follow_links)),
        };

        let opts = EngineOptions {
            config: WalkConfig {
                threads: self.threads,
            },
            probe,
        };

        run(&dir, opts)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
