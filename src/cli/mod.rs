use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub mod args;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let outcome = run::run(args)?;
    report::print(&outcome, verbose);

    Ok(exit_code::exit_status_from_outcome(&outcome).into())
}
