//! Copies an invocation's inputs into the repro and rewrites its arguments

use super::copier::Copier;
use super::registry::{disambiguated_dir_name, disambiguated_file_name, CopyRegistry};
use crate::command_line::Argument;
use crate::error::ReproError;
use crate::utils::{clean_path, file_name_string, normalize_path};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

/// Copy counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files_copied: usize,
    pub directories_copied: usize,
    pub reused: usize,
    pub unresolved_roots: usize,
}

pub struct Materializer<C: Copier> {
    output_dir: PathBuf,
    input_dir: PathBuf,
    input_prefix: String,
    out_dir_name: String,
    copier: C,
    stats: CopyStats,
}

impl<C: Copier> Materializer<C> {
    /// Copies go to `output_dir/input_dir`, which must already exist. Rewritten
    /// paths are `input_dir/<name>`, relative to `output_dir`.
    pub fn new(output_dir: &Path, input_dir: &str, copier: C) -> Self {
        let input_prefix = normalize_path(input_dir).trim_end_matches('/').to_string();
        let output_dir = clean_path(output_dir);
        Self {
            input_dir: output_dir.join(&input_prefix),
            output_dir,
            input_prefix,
            out_dir_name: "out".to_string(),
            copier,
            stats: CopyStats::default(),
        }
    }

    /// Literal written for `-out`.
    pub fn out_dir_name(mut self, name: impl Into<String>) -> Self {
        self.out_dir_name = name.into();
        self
    }

    pub fn stats(&self) -> CopyStats {
        self.stats
    }

    pub fn copier(&self) -> &C {
        &self.copier
    }

    /// Produce the rewritten argument list. The input slice is never modified;
    /// each rewritten argument is a fresh value.
    pub fn materialize(
        &mut self,
        arguments: &[Argument],
        registry: &mut CopyRegistry,
    ) -> Result<Vec<Argument>, ReproError> {
        let mut rewritten = Vec::with_capacity(arguments.len());
        for argument in arguments {
            rewritten.push(self.rewrite(argument, registry)?);
        }
        Ok(rewritten)
    }

    fn rewrite(
        &mut self,
        argument: &Argument,
        registry: &mut CopyRegistry,
    ) -> Result<Argument, ReproError> {
        let rewritten = match argument {
            Argument::Reference(path)
            | Argument::Descriptor(path)
            | Argument::LinkAttributes(path) => {
                argument.with_path(self.copy_to_input(path, EntryKind::File, registry)?)
            }
            Argument::Root { assembly_path, .. } => {
                if self.copier.is_file(assembly_path) {
                    argument.with_path(self.copy_to_input(assembly_path, EntryKind::File, registry)?)
                } else {
                    let name = file_name_string(assembly_path)
                        .ok_or_else(|| ReproError::NoFileName { path: assembly_path.clone() })?;
                    tracing::info!(
                        path = %assembly_path.display(),
                        "root assembly not on disk, referencing it by name"
                    );
                    self.stats.unresolved_roots += 1;
                    argument.with_path(name)
                }
            }
            Argument::SearchDirectory(path) => {
                argument.with_path(self.copy_to_input(path, EntryKind::Directory, registry)?)
            }
            Argument::Out(_) => Argument::Out(PathBuf::from(&self.out_dir_name)),
            Argument::DotnetPathSection(_) | Argument::ToolPathSection(_) | Argument::Unknown(_) => {
                argument.clone()
            }
        };
        Ok(rewritten)
    }

    /// Copy `source` under the input directory once and return its relative path.
    fn copy_to_input(
        &mut self,
        source: &Path,
        kind: EntryKind,
        registry: &mut CopyRegistry,
    ) -> Result<String, ReproError> {
        let source = clean_path(source);
        if let Some(relative) = registry.get(&source) {
            self.stats.reused += 1;
            return Ok(relative.to_string());
        }

        if kind == EntryKind::Directory && self.output_dir.starts_with(&source) {
            return Err(ReproError::OutputInsideSource {
                directory: source,
                output_dir: self.output_dir.clone(),
            });
        }

        let base_name =
            file_name_string(&source).ok_or_else(|| ReproError::NoFileName { path: source.clone() })?;
        let mut name = base_name.clone();
        let mut index = 1;
        while self.copier.is_taken(&self.input_dir.join(&name)) {
            name = match kind {
                EntryKind::File => disambiguated_file_name(&base_name, index),
                EntryKind::Directory => disambiguated_dir_name(&base_name, index),
            };
            index += 1;
        }

        let dest = self.input_dir.join(&name);
        let copied = match kind {
            EntryKind::File => self.copier.copy_file(&source, &dest),
            EntryKind::Directory => self.copier.copy_dir(&source, &dest),
        };
        copied.map_err(|e| ReproError::Copy { from: source.clone(), to: dest.clone(), source: e })?;

        match kind {
            EntryKind::File => self.stats.files_copied += 1,
            EntryKind::Directory => self.stats.directories_copied += 1,
        }
        tracing::debug!(from = %source.display(), to = %dest.display(), "copied into repro input");

        let relative = format!("{}/{}", self.input_prefix, name);
        registry.insert(source, relative.clone());
        Ok(relative)
    }
}
