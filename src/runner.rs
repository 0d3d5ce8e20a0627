//! Sequential execution of the configured conversion jobs.
//!
//! Jobs are independent: each one opens, converts, and closes its own files,
//! and a skipped or failed job never prevents the jobs after it.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::converter;
use crate::issue::{Issue, Severity};

/// Terminal state of one job.
#[derive(Debug)]
pub enum JobStatus {
    /// Destination written with this many entries.
    Converted { entries_written: usize },
    /// Source missing; no destination produced.
    Skipped,
    /// Read or write failure; the job was aborted.
    Failed { error: anyhow::Error },
}

#[derive(Debug)]
pub struct JobReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub status: JobStatus,
    pub issues: Vec<Issue>,
}

/// Aggregated result of a full run.
///
/// Consumed only by reporting and exit-code mapping; nothing downstream
/// depends on it.
#[derive(Debug, Default)]
pub struct RunResult {
    pub jobs: Vec<JobReport>,
}

impl RunResult {
    pub fn converted_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| matches!(j.status, JobStatus::Converted { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| matches!(j.status, JobStatus::Skipped))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| matches!(j.status, JobStatus::Failed { .. }))
            .count()
    }

    pub fn total_entries(&self) -> usize {
        self.jobs
            .iter()
            .filter_map(|j| match j.status {
                JobStatus::Converted { entries_written } => Some(entries_written),
                _ => None,
            })
            .sum()
    }

    pub fn warning_count(&self) -> usize {
        self.issue_count(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issue_count(Severity::Error) + self.failed_count()
    }

    fn issue_count(&self, severity: Severity) -> usize {
        self.jobs
            .iter()
            .flat_map(|j| &j.issues)
            .filter(|i| i.severity == severity)
            .count()
    }

    /// True when every job converted and no line was skipped.
    pub fn is_clean(&self) -> bool {
        self.converted_count() == self.jobs.len()
            && self.jobs.iter().all(|j| j.issues.is_empty())
    }
}

/// Run every configured job in order, resolving filenames against the
/// configured base directory.
pub fn run_jobs(config: &Config) -> RunResult {
    let base = Path::new(&config.base_dir);

    let mut jobs = Vec::with_capacity(config.jobs.len());
    for job in &config.jobs {
        let source = base.join(&job.source);
        let dest = base.join(&job.dest);

        let (status, issues) = match converter::convert_file(&source, &dest) {
            Ok(outcome) => match outcome.entries_written {
                Some(entries_written) => (JobStatus::Converted { entries_written }, outcome.issues),
                None => (JobStatus::Skipped, outcome.issues),
            },
            Err(error) => (JobStatus::Failed { error }, Vec::new()),
        };

        jobs.push(JobReport {
            source,
            dest,
            status,
            issues,
        });
    }

    RunResult { jobs }
}
