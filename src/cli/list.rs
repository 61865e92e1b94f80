//! List command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use super::utils::{load_tasks, resolve_config};
use crate::buildlog::TaskNode;
use crate::config::CliOverrides;
use crate::select::TaskSelector;

#[derive(Args)]
pub struct ListArgs {
    /// Structured build log to read (.json, .yaml or .yml export)
    #[arg(value_name = "BINLOG")]
    pub binlog: PathBuf,

    /// Mark the invocation `create` would pick for this target
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Mark the invocation `create` would pick for this project
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Task name the linker is logged under
    #[arg(long, value_name = "NAME")]
    pub task_name: Option<String>,

    /// Path to config file (illink-repro.toml or illink-repro.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<ExitCode> {
    let config = resolve_config(
        args.config.as_deref(),
        CliOverrides { task_name: args.task_name.clone(), ..CliOverrides::default() },
    )?;
    let tasks = load_tasks(&args.binlog, &config.task_name)?;

    let selected = match TaskSelector::new(&config.task_name)
        .project(args.project.as_deref())
        .target(args.target.as_deref())
        .select(&tasks)
    {
        Ok(selection) => selection.index,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{} task(s) named {}:", tasks.len(), config.task_name);
    for (index, task) in tasks.iter().enumerate() {
        let marker = if index == selected { "*" } else { " " };
        let status = if task.has_errors() { "failed" } else { "ok" };
        println!(
            "{marker} [{index}] project: {}  target: {}  status: {status}",
            task.project_name().unwrap_or("<unknown>"),
            task.target_name().unwrap_or("<none>"),
        );
    }
    Ok(ExitCode::SUCCESS)
}
