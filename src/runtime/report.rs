//! Plain-text rendering of a catalog for the terminal.

use std::io::{self, Write};

use crate::config::DisplaySettings;
use crate::library::{Catalog, display_from_fields};

/// Write a numbered listing of `catalog` under a `header_text (label)` heading.
pub fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    display: &DisplaySettings,
    label: &str,
) -> io::Result<()> {
    writeln!(out, "== {} ({}) ==", display.header_text, label)?;
    if catalog.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for (i, track) in catalog.tracks().iter().enumerate() {
        let line = display_from_fields(track, &display.fields, &display.separator);
        writeln!(out, "{:>3}. {}", i + 1, line)?;
    }
    writeln!(out)
}

/// Write track count, total plays and the popular titles.
pub fn write_summary<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let popular: Vec<&str> = catalog.popular().map(|t| t.title()).collect();

    writeln!(out, "tracks: {}", catalog.len())?;
    writeln!(out, "total plays: {}", catalog.total_plays())?;
    if popular.is_empty() {
        writeln!(out, "popular: none")
    } else {
        writeln!(out, "popular: {}", popular.join(", "))
    }
}
