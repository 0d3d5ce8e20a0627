//! Single-file conversion: read a frequency list, write a JSON dictionary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::entry::Entry;
use crate::issue::Issue;
use crate::json_writer;
use crate::parser::{self, LineOutcome};

/// What happened to a single conversion job.
#[derive(Debug)]
pub struct ConversionOutcome {
    /// Number of entries written to the destination, or `None` if the job
    /// was skipped because the source does not exist.
    pub entries_written: Option<usize>,
    /// Non-fatal conditions collected while converting.
    pub issues: Vec<Issue>,
}

impl ConversionOutcome {
    pub fn skipped(&self) -> bool {
        self.entries_written.is_none()
    }
}

/// Convert one frequency list into a JSON dictionary file.
///
/// A missing source is recorded as an issue and skips the job without an
/// error, so later jobs still run. Read and write failures are errors and
/// abort this job only.
pub fn convert_file(source: &Path, dest: &Path) -> Result<ConversionOutcome> {
    if !source.exists() {
        return Ok(ConversionOutcome {
            entries_written: None,
            issues: vec![Issue::source_not_found(source)],
        });
    }

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read file: {}", source.display()))?;

    let mut entries: Vec<Entry> = Vec::new();
    let mut issues: Vec<Issue> = Vec::new();
    for (index, line) in content.lines().enumerate() {
        match parser::parse_line(index + 1, line) {
            LineOutcome::Entry(entry) => entries.push(entry),
            LineOutcome::Blank => {}
            LineOutcome::Rejected(issue) => issues.push(issue),
        }
    }

    json_writer::write_entries(dest, &entries)?;

    Ok(ConversionOutcome {
        entries_written: Some(entries.len()),
        issues,
    })
}
