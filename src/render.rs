use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

use crate::entry::EntryKind;
use crate::results::Listing;

const DIR_STYLE: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

/// How entry lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Color only when stdout is a terminal and `NO_COLOR` is unset or empty.
    pub fn detect() -> Self {
        Self::for_terminal(io::stdout().is_terminal(), std::env::var_os("NO_COLOR"))
    }

    fn for_terminal(is_terminal: bool, no_color: Option<OsString>) -> Self {
        let disabled = no_color.is_some_and(|v| !v.is_empty());
        Self {
            color: is_terminal && !disabled,
        }
    }
}

/// Format one classified entry, without a trailing newline.
///
/// Files are `name true`. Anything else is the bare name in bold blue, or
/// `name false` when color is off.
pub fn format_entry(name: &str, kind: EntryKind, style: Style) -> String {
    match (kind.is_file(), style.color) {
        (true, _) => format!("{name} true"),
        (false, true) => format!("{DIR_STYLE}{name}{RESET}"),
        (false, false) => format!("{name} false"),
    }
}

/// Write `listing` in enumeration order: classified entries to `out`, one
/// diagnostic line per failed lookup to `err`.
pub fn write_listing<W, E>(listing: &Listing, style: Style, out: &mut W, err: &mut E) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    for item in &listing.entries {
        match &item.outcome {
            Ok(kind) => writeln!(out, "{}", format_entry(item.name(), *kind, style))?,
            Err(e) => writeln!(err, "parls: {e}")?,
        }
    }
    out.flush()?;
    err.flush()
}
