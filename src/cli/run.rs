use std::{env, fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command, ConvertCommand};
use crate::config::{self, CONFIG_FILE_NAME, default_config_json};
use crate::runner::{self, RunResult};

/// What a finished command produced, for reporting and exit-code mapping.
pub enum CommandOutcome {
    Convert(RunResult),
    Init,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandOutcome> {
    match command {
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandOutcome::Init)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn convert(cmd: ConvertCommand) -> Result<CommandOutcome> {
    let cwd = env::current_dir()?;
    let loaded = config::load_config(&cwd)?;

    let mut config = loaded.config;
    if let Some(base_dir) = cmd.args.common.base_dir {
        config.base_dir = base_dir.to_string_lossy().into_owned();
    }

    Ok(CommandOutcome::Convert(runner::run_jobs(&config)))
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
