use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".freqdictrc.json";

/// One configured conversion: a source frequency list and the JSON
/// dictionary it produces, both relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub source: String,
    pub dest: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory all configured filenames are resolved against.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    #[serde(default = "default_jobs")]
    pub jobs: Vec<Job>,
}

fn default_base_dir() -> String {
    "app/src/main/assets/common/dictionaries".to_string()
}

fn default_jobs() -> Vec<Job> {
    ["en", "fr", "pl", "de", "ru", "pt", "es"]
        .map(|lang| Job {
            source: format!("{}_50k.txt", lang),
            dest: format!("{}_base.json", lang),
        })
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            jobs: default_jobs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects jobs with empty filenames and jobs whose destination would
    /// overwrite their own source.
    pub fn validate(&self) -> Result<()> {
        for job in &self.jobs {
            if job.source.is_empty() || job.dest.is_empty() {
                bail!("Job filenames must not be empty");
            }
            if job.source == job.dest {
                bail!(
                    "Job destination must differ from its source: \"{}\"",
                    job.source
                );
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
