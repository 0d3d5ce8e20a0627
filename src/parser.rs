//! Line parsing for the frequency list format.
//!
//! Each input line carries a word and its frequency, separated by whitespace.
//! The last whitespace-separated token is the frequency; everything before it
//! is the word, so multi-word phrases like `New York 1234` parse as expected.

use crate::entry::Entry;
use crate::issue::Issue;

/// Result of parsing a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced a valid entry.
    Entry(Entry),
    /// The line was empty after trimming. Blank lines are valid separators
    /// and are skipped without a warning.
    Blank,
    /// The line was invalid and is skipped; conversion continues.
    Rejected(Issue),
}

/// Parse one line of a frequency list.
///
/// `line_number` is 1-based and only used for reporting.
pub fn parse_line(line_number: usize, raw: &str) -> LineOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineOutcome::Blank;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens.as_slice() {
        [] | [_] => LineOutcome::Rejected(Issue::malformed_line(line_number, trimmed)),
        [word_tokens @ .., frequency] => match frequency.parse::<i64>() {
            Ok(frequency) => LineOutcome::Entry(Entry {
                word: word_tokens.join(" "),
                frequency,
            }),
            Err(_) => LineOutcome::Rejected(Issue::invalid_frequency(line_number, frequency)),
        },
    }
}
