//! Structured build-log access
//!
//! The rest of the crate only relies on the [`TaskNode`] shape: a task name, the
//! owning target and project, the raw command line and whether errors were
//! recorded. [`BuildLog`] is the concrete reader for JSON/YAML tree exports.

use crate::error::BuildLogError;
use std::fs;
use std::path::{Path, PathBuf};

pub mod model;

pub use model::BuildNode;

/// Read-only view of one task invocation inside a build log.
pub trait TaskNode {
    fn name(&self) -> &str;
    fn target_name(&self) -> Option<&str>;
    fn project_name(&self) -> Option<&str>;
    fn project_directory(&self) -> Option<&Path>;
    fn command_line(&self) -> &str;
    fn has_errors(&self) -> bool;
}

/// A task flattened out of the tree together with its owning target and project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggedTask {
    pub name: String,
    pub target_name: Option<String>,
    pub project_name: Option<String>,
    pub project_directory: Option<PathBuf>,
    pub command_line: String,
    pub error_count: usize,
}

impl TaskNode for LoggedTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    fn project_directory(&self) -> Option<&Path> {
        self.project_directory.as_deref()
    }

    fn command_line(&self) -> &str {
        &self.command_line
    }

    fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

#[derive(Debug, Clone)]
pub struct BuildLog {
    pub root: BuildNode,
}

#[derive(Clone, Default)]
struct Scope<'a> {
    project_name: Option<&'a str>,
    project_directory: Option<PathBuf>,
    target_name: Option<&'a str>,
}

impl BuildLog {
    pub fn new(root: BuildNode) -> Self {
        Self { root }
    }

    /// Every task in the log, in log order.
    pub fn tasks(&self) -> Vec<LoggedTask> {
        let mut out = Vec::new();
        collect_tasks(&self.root, Scope::default(), &mut out);
        out
    }

    /// Tasks whose name matches `task_name` exactly, in log order.
    pub fn find_tasks(&self, task_name: &str) -> Vec<LoggedTask> {
        self.tasks().into_iter().filter(|task| task.name() == task_name).collect()
    }
}

fn collect_tasks<'a>(node: &'a BuildNode, scope: Scope<'a>, out: &mut Vec<LoggedTask>) {
    let scope = match node {
        BuildNode::Project { name, file, directory, .. } => Scope {
            project_name: Some(name.as_str()),
            project_directory: directory
                .clone()
                .or_else(|| file.as_deref().and_then(Path::parent).map(Path::to_path_buf)),
            target_name: None,
        },
        BuildNode::Target { name, .. } => Scope { target_name: Some(name.as_str()), ..scope },
        BuildNode::Task { name, command_line, errors, .. } => {
            out.push(LoggedTask {
                name: name.clone(),
                target_name: scope.target_name.map(str::to_string),
                project_name: scope.project_name.map(str::to_string),
                project_directory: scope.project_directory.clone(),
                command_line: command_line.clone(),
                error_count: errors.len(),
            });
            scope
        }
        BuildNode::Build { .. } | BuildNode::Folder { .. } => scope,
    };

    for child in node.children() {
        collect_tasks(child, scope.clone(), out);
    }
}

/// Load a build log exported as `.json`, `.yaml` or `.yml`.
pub fn read_build_log(path: &Path) -> Result<BuildLog, BuildLogError> {
    let content = fs::read_to_string(path)
        .map_err(|source| BuildLogError::Read { path: path.to_path_buf(), source })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let root = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .map_err(|source| BuildLogError::Json { path: path.to_path_buf(), source })?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|source| BuildLogError::Yaml { path: path.to_path_buf(), source })?,
        other => {
            return Err(BuildLogError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };

    Ok(BuildLog::new(root))
}
