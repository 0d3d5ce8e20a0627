use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for batch tools.
///
/// - `Success` (0): Command completed successfully, every job converted cleanly
/// - `Failure` (1): Command completed but some jobs were skipped, failed,
///   or produced warnings
/// - `Error` (2): Command failed due to internal error (config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no problems found.
    Success,
    /// Command completed but found problems (skipped jobs, skipped lines).
    Failure,
    /// Command failed due to internal error (config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
