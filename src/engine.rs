use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::entry::{Entry, ListedEntry};
use crate::error::ListError;
use crate::probe::MetadataProbe;
use crate::results::Listing;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Lookup parameters passed from the builder to the engine.
///
/// `pub(crate)`: not part of the public API. Callers configure these
/// via the builder methods (`.threads()`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct WalkConfig {
    pub threads: usize,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config: WalkConfig,
    pub probe:  Box<dyn MetadataProbe>,
}

/// One enumerated child: either ready for lookup, or already failed while
/// the directory was being read.
#[derive(Debug)]
pub(crate) enum Child {
    Found(Entry),
    Failed(ListedEntry),
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// List `dir`: enumerate its children, then look every one of them up
/// concurrently and pair each outcome with its entry.
///
/// Only failures on `dir` itself are returned as `Err`. A failed lookup
/// stays attached to its entry inside the [`Listing`].
pub(crate) fn run(dir: &Path, opts: EngineOptions) -> Result<Listing, ListError> {
    let start = Instant::now();

    let children = enumerate(dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.config.threads)
        .thread_name(|i| format!("parls-probe-{i}"))
        .build()
        .map_err(|e| ListError::ThreadPool(e.to_string()))?;

    log::debug!(
        "probing {} entries of {} on {} threads",
        children.len(),
        dir.display(),
        opts.config.threads
    );

    let listed = fan_out(&pool, children, opts.probe.as_ref());
    for item in &listed {
        if let Err(e) = &item.outcome {
            log::debug!("lookup failed for {}: {e}", item.name());
        }
    }

    let listing = Listing::new(listed, start.elapsed());
    log::debug!(
        "listed {} entries ({} failed) in {:.3}s",
        listing.entries.len(),
        listing.stats.failed,
        listing.stats.duration.as_secs_f64()
    );

    Ok(listing)
}

/// Run one lookup per found child on `pool` and wait for all of them.
///
/// The indexed collect returns one `ListedEntry` per child, in the same
/// order as `children`, whatever order the lookups finish in.
fn fan_out(
    pool: &rayon::ThreadPool,
    children: Vec<Child>,
    probe: &dyn MetadataProbe,
) -> Vec<ListedEntry> {
    pool.install(|| {
        children
            .into_par_iter()
            .map(|child| match child {
                Child::Found(entry) => {
                    let outcome = probe.probe(&entry);
                    ListedEntry { entry, outcome }
                }
                Child::Failed(listed) => listed,
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Collect the immediate children of `dir` in the order the OS returns them.
///
/// Nothing is filtered: hidden files and ignore-file rules are all disabled.
/// A child the walker fails on is kept in place as [`Child::Failed`].
pub(crate) fn enumerate(dir: &Path) -> Result<Vec<Child>, ListError> {
    // Resolve the root so a symlink to a directory still gets listed; the
    // children themselves are never followed.
    let root = fs::canonicalize(dir).map_err(|e| ListError::from_dir_io(dir, e))?;
    let md = fs::metadata(&root).map_err(|e| ListError::from_dir_io(dir, e))?;
    if !md.is_dir() {
        return Err(ListError::NotADirectory(dir.to_path_buf()));
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false)
        .max_depth(Some(1))
        .build();

    let mut children = Vec::new();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                children.push(Child::Failed(map_ignore_error(dir, &root, e)?));
                continue;
            }
        };

        // Skip the root itself
        if dent.depth() == 0 {
            continue;
        }

        children.push(Child::Found(Entry {
            name: dent.file_name().to_string_lossy().into_owned(),
            path: dir.join(dent.file_name()),
        }));
    }

    Ok(children)
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ListError
// ---------------------------------------------------------------------------

/// Map a walker error. An error carrying the path of a child of `root`
/// becomes that child's failed outcome, reported under `dir`. Anything else
/// is a failure of `dir` itself and aborts the listing.
fn map_ignore_error(dir: &Path, root: &Path, e: ignore::Error) -> Result<ListedEntry, ListError> {
    let mut path: Option<PathBuf> = None;
    let mut err = e;
    let inner = loop {
        err = match err {
            ignore::Error::WithDepth { err, .. } => *err,
            ignore::Error::WithPath { path: p, err } => {
                path.get_or_insert(p);
                *err
            }
            other => break other,
        };
    };

    let io_err = match inner {
        ignore::Error::Io(io_err) => io_err,
        other => io::Error::other(other.to_string()),
    };

    let child = path
        .filter(|p| p != root)
        .and_then(|p| p.file_name().map(|n| n.to_owned()));

    match child {
        Some(name) => {
            let entry = Entry {
                name: name.to_string_lossy().into_owned(),
                path: dir.join(&name),
            };
            let outcome = Err(ListError::from_entry_io(&entry.path, io_err));
            Ok(ListedEntry { entry, outcome })
        }
        None => Err(ListError::from_dir_io(dir, io_err)),
    }
}
