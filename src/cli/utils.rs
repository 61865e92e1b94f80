//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::buildlog::{read_build_log, LoggedTask};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;

/// Resolve the effective configuration for a command.
pub fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, config_path)?;
    merge_cli_with_config(file_config, overrides)
}

/// Read the build log and return every task named `task_name`, in log order.
pub fn load_tasks(binlog: &Path, task_name: &str) -> Result<Vec<LoggedTask>> {
    ensure_binlog_exists(binlog)?;
    let log = read_build_log(binlog)
        .with_context(|| format!("Failed loading build log {}", binlog.display()))?;
    let tasks = log.find_tasks(task_name);
    tracing::debug!(count = tasks.len(), task_name, "found candidate tasks");
    Ok(tasks)
}

pub fn ensure_binlog_exists(binlog: &Path) -> Result<()> {
    if !binlog.is_file() {
        anyhow::bail!("Binlog {} doesn't exist.", binlog.display());
    }
    Ok(())
}

/// Make `path` absolute against the current directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(crate::utils::clean_path(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(crate::utils::clean_path(&cwd.join(path)))
}
