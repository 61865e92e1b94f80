//! Typed errors for the library layer
//!
//! The CLI wraps these in `anyhow` with extra context; the variants stay distinct
//! so callers can tell a missing task apart from a broken invocation or a failed copy.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The recorded command line does not have the shape of a linker invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Invalid ILLink command line: no non-empty line found")]
    Empty,

    #[error("Invalid ILLink command line: no quoted tool path on the first line: {line}")]
    MissingToolPath { line: String },
}

/// No candidate task survived the selection filters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error(
        "No {task_name} task found in the log, make sure that trimming runs (and is not skipped by incremental build)."
    )]
    NoTasks { task_name: String },

    #[error("No {task_name} task in '{project}' project found.")]
    NoProjectMatch { task_name: String, project: String },

    #[error("No {task_name} task in '{target}' target found.")]
    NoTargetMatch { task_name: String, target: String },
}

/// Reading the structured build log failed.
#[derive(Debug, Error)]
pub enum BuildLogError {
    #[error("Failed reading build log {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON build log {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML build log {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported build log extension '.{extension}' for file {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },
}

/// Materializing the repro directory failed. Partial output is left in place.
#[derive(Debug, Error)]
pub enum ReproError {
    #[error("Failed copying {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed writing {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Search directory {directory} contains the output directory {output_dir}")]
    OutputInsideSource { directory: PathBuf, output_dir: PathBuf },

    #[error("Path has no file name to copy under the input directory: {path}")]
    NoFileName { path: PathBuf },
}
