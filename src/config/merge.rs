//! Layering of environment and command-line overrides onto file config

use crate::domain::Config;
use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use std::path::PathBuf;

/// Environment variables with this prefix override config keys,
/// e.g. `ILLINK_REPRO_TASK_NAME`.
pub const ENV_PREFIX: &str = "ILLINK_REPRO_";

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub task_name: Option<String>,
}

pub fn merge_cli_with_config(file_config: Config, cli: CliOverrides) -> Result<Config> {
    let mut merged: Config = Figment::from(Serialized::defaults(file_config))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .with_context(|| format!("Invalid {ENV_PREFIX}* environment override"))?;

    if let Some(output_dir) = cli.output_dir {
        merged.output_dir = output_dir;
    }
    if let Some(task_name) = cli.task_name.filter(|name| !name.is_empty()) {
        merged.task_name = task_name;
    }
    Ok(merged)
}
