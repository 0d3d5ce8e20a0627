//! Report formatting and printing utilities.
//!
//! This module is separate from the conversion logic to allow freqdict to be
//! used as a library without printing side effects. Console output is
//! informational only, not a machine-readable contract.

use colored::Colorize;

use super::run::CommandOutcome;
use crate::config::CONFIG_FILE_NAME;
use crate::issue::{Issue, Severity};
use crate::runner::{JobReport, JobStatus, RunResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(outcome: &CommandOutcome, verbose: bool) {
    match outcome {
        CommandOutcome::Init => {
            println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
        }
        CommandOutcome::Convert(result) => print_run(result, verbose),
    }
}

fn print_run(result: &RunResult, verbose: bool) {
    for job in &result.jobs {
        print_job(job, verbose);
    }

    print_summary(result);
}

fn print_job(job: &JobReport, verbose: bool) {
    if verbose {
        println!("Reading {}...", job.source.display());
    }

    for issue in &job.issues {
        print_issue(issue);
    }

    match &job.status {
        JobStatus::Converted { entries_written } => {
            println!(
                "{} {} ({} {})",
                SUCCESS_MARK.green(),
                job.dest.display(),
                entries_written,
                if *entries_written == 1 {
                    "entry"
                } else {
                    "entries"
                }
            );
        }
        JobStatus::Skipped => {
            println!(
                "{} {} skipped",
                FAILURE_MARK.red(),
                job.dest.display().to_string().dimmed()
            );
        }
        JobStatus::Failed { error } => {
            println!("{} {}: {:#}", FAILURE_MARK.red(), job.dest.display(), error);
        }
    }
}

fn print_issue(issue: &Issue) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    match issue.line {
        Some(line) => println!(
            "{}: line {}: {}  {}",
            severity_str,
            line,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        ),
        None => println!(
            "{}: {}  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        ),
    }
}

fn print_summary(result: &RunResult) {
    let converted = result.converted_count();
    let total_errors = result.error_count();
    let total_warnings = result.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems == 0 {
        println!(
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Converted {} {} ({} {}) - no issues found",
                converted,
                if converted == 1 { "file" } else { "files" },
                result.total_entries(),
                if result.total_entries() == 1 {
                    "entry"
                } else {
                    "entries"
                }
            )
            .green()
        );
    } else {
        println!(
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}
