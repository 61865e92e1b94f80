//! Create command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::utils::{absolutize, ensure_binlog_exists, load_tasks, resolve_config};
use crate::buildlog::TaskNode;
use crate::command_line::Invocation;
use crate::config::CliOverrides;
use crate::repro::create_repro;
use crate::select::{Selection, SelectionReason, TaskSelector};

#[derive(Args)]
pub struct CreateArgs {
    /// Structured build log to read (.json, .yaml or .yml export)
    #[arg(value_name = "BINLOG")]
    pub binlog: PathBuf,

    /// Directory to create the repro in [default: ./repro]
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Delete the output directory first if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Only consider invocations from this target
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Only consider invocations from this project (with or without extension)
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Task name the linker is logged under
    #[arg(long, value_name = "NAME")]
    pub task_name: Option<String>,

    /// Path to config file (illink-repro.toml or illink-repro.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: CreateArgs) -> Result<ExitCode> {
    ensure_binlog_exists(&args.binlog)?;

    let config = resolve_config(
        args.config.as_deref(),
        CliOverrides { output_dir: args.out.clone(), task_name: args.task_name.clone() },
    )?;
    let output_dir = absolutize(&config.output_dir)?;
    if output_dir.exists() && !args.force {
        anyhow::bail!(
            "Output path {} already exists. Use --force to overwrite.",
            output_dir.display()
        );
    }

    let tasks = load_tasks(&args.binlog, &config.task_name)?;
    let selection = match TaskSelector::new(&config.task_name)
        .project(args.project.as_deref())
        .target(args.target.as_deref())
        .select(&tasks)
    {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    report_selection(&config.task_name, &selection);

    let task = &tasks[selection.index];
    let project_name = task.project_name().unwrap_or("<unknown>");
    println!("Creating repro for {} task from project {}", config.task_name, project_name);

    let working_dir = match task.project_directory() {
        Some(dir) => dir.to_path_buf(),
        None => fallback_working_dir(&args.binlog)?,
    };
    let invocation = Invocation::parse(task.command_line(), &working_dir).with_context(|| {
        format!("Unexpected {} command line in project {}", config.task_name, project_name)
    })?;

    prepare_output_dir(&output_dir)?;
    let summary = create_repro(&invocation.arguments, &output_dir, &config.layout())
        .with_context(|| format!("Failed creating repro in {}", output_dir.display()))?;

    tracing::info!(
        files = summary.stats.files_copied,
        directories = summary.stats.directories_copied,
        "repro complete"
    );
    println!("{}", summary.output_dir.display());
    Ok(ExitCode::SUCCESS)
}

fn report_selection(task_name: &str, selection: &Selection) {
    match selection.reason {
        SelectionReason::Only => {}
        SelectionReason::FirstFailing { failing } if failing > 1 => {
            tracing::warn!(failing, "more than one failing {task_name} task");
            println!("Found more than one failing {task_name} task. Picking the first failing one.");
        }
        SelectionReason::FirstFailing { .. } => {
            println!("Found failing {task_name} task, picking the failing one over any other.");
        }
        SelectionReason::FirstOfMany { .. } => {
            println!("Found more than one {task_name} task and no failing one. Picking the first one.");
        }
    }
}

/// Tasks without a project directory resolve relative paths against the log's directory.
fn fallback_working_dir(binlog: &Path) -> Result<PathBuf> {
    let log_path = absolutize(binlog)?;
    Ok(log_path.parent().map(Path::to_path_buf).unwrap_or(log_path))
}

fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        tracing::debug!("removing existing output {}", output_dir.display());
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed removing {}", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed creating {}", output_dir.display()))
}
