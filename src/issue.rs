use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    SourceNotFound,
    MalformedLine,
    InvalidFrequency,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::SourceNotFound => write!(f, "source-not-found"),
            Rule::MalformedLine => write!(f, "malformed-line"),
            Rule::InvalidFrequency => write!(f, "invalid-frequency"),
        }
    }
}

/// A non-fatal condition encountered during conversion.
///
/// Every issue is locally recovered: a line issue skips that line, a missing
/// source skips that job. None of them abort the overall run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based input line number, if the issue is tied to a line.
    pub line: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
}

impl Issue {
    pub fn source_not_found(path: &Path) -> Self {
        Self {
            line: None,
            message: format!("{} not found", path.display()),
            severity: Severity::Error,
            rule: Rule::SourceNotFound,
        }
    }

    pub fn malformed_line(line: usize, content: &str) -> Self {
        Self {
            line: Some(line),
            message: format!("invalid format: {}", content),
            severity: Severity::Warning,
            rule: Rule::MalformedLine,
        }
    }

    pub fn invalid_frequency(line: usize, token: &str) -> Self {
        Self {
            line: Some(line),
            message: format!("invalid frequency: {}", token),
            severity: Severity::Warning,
            rule: Rule::InvalidFrequency,
        }
    }
}
