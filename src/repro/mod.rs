//! Repro directory materialization
//!
//! A repro is laid out as:
//! - `<out>/input/` copies of every file and directory the invocation referenced
//! - `<out>/linker.rsp` the rewritten arguments, one per line

use crate::command_line::Argument;
use crate::domain::ReproLayout;
use crate::error::ReproError;
use std::fs;
use std::path::{Path, PathBuf};

pub mod copier;
pub mod materialize;
pub mod registry;

pub use copier::{Copier, FsCopier};
pub use materialize::{CopyStats, Materializer};
pub use registry::CopyRegistry;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct ReproSummary {
    pub output_dir: PathBuf,
    pub response_file: PathBuf,
    pub arguments: Vec<Argument>,
    pub stats: CopyStats,
}

/// Render the response-file text: one argument per line, sections skipped.
pub fn render_response_file(arguments: &[Argument]) -> String {
    let mut out = String::new();
    for argument in arguments.iter().filter(|arg| arg.is_response_entry()) {
        out.push_str(&argument.to_string());
        out.push('\n');
    }
    out
}

pub fn write_response_file(path: &Path, arguments: &[Argument]) -> Result<(), ReproError> {
    fs::write(path, render_response_file(arguments))
        .map_err(|source| ReproError::Write { path: path.to_path_buf(), source })
}

/// Build a repro for `arguments` under `output_dir`.
///
/// `output_dir` is owned by this run; callers clear any previous content first.
/// On failure the directory is left as-is.
pub fn create_repro(
    arguments: &[Argument],
    output_dir: &Path,
    layout: &ReproLayout,
) -> Result<ReproSummary, ReproError> {
    let input_dir = output_dir.join(&layout.input_dir);
    fs::create_dir_all(&input_dir)
        .map_err(|source| ReproError::Write { path: input_dir.clone(), source })?;

    let mut registry = CopyRegistry::new();
    let mut materializer = Materializer::new(output_dir, &layout.input_dir, FsCopier)
        .out_dir_name(layout.out_dir_name.clone());
    let rewritten = materializer.materialize(arguments, &mut registry)?;

    let response_file = output_dir.join(&layout.response_file);
    write_response_file(&response_file, &rewritten)?;

    let stats = materializer.stats();
    tracing::info!(
        files = stats.files_copied,
        directories = stats.directories_copied,
        response_file = %response_file.display(),
        "repro written"
    );

    Ok(ReproSummary {
        output_dir: output_dir.to_path_buf(),
        response_file,
        arguments: rewritten,
        stats,
    })
}
