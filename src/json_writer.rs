//! Byte-exact rendering of the dictionary JSON format.
//!
//! Downstream consumers diff and hash these files, so the output format is a
//! contract, not a convenience: one compact object per line, two-space
//! indent, a comma on every line but the last, and no trailing newline after
//! the closing bracket.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::entry::Entry;

/// Render entries as a dictionary JSON array.
///
/// An empty entry list renders as exactly `[\n]`.
pub fn render_entries(entries: &[Entry]) -> Result<String> {
    let mut out = String::from("[\n");
    for (i, entry) in entries.iter().enumerate() {
        let object = serde_json::to_string(entry).context("Failed to serialize entry")?;
        out.push_str("  ");
        out.push_str(&object);
        if i + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    Ok(out)
}

/// Write the rendered entries to `path`, fully overwriting any existing file.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let content = render_entries(entries)?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
