//! Serialized build-log tree

use serde::Deserialize;
use std::path::PathBuf;

/// One node of a structured build log.
///
/// Logs are exported as a tree of `build` → `project` → `target` → `task` nodes;
/// projects may nest under targets when one project builds another.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildNode {
    Build {
        #[serde(default)]
        children: Vec<BuildNode>,
    },
    Project {
        name: String,
        /// Full path of the project file.
        #[serde(default)]
        file: Option<PathBuf>,
        /// Directory relative paths in the project's tasks are resolved against.
        #[serde(default)]
        directory: Option<PathBuf>,
        #[serde(default)]
        children: Vec<BuildNode>,
    },
    Target {
        name: String,
        #[serde(default)]
        children: Vec<BuildNode>,
    },
    Task {
        name: String,
        #[serde(default, alias = "command_line_arguments")]
        command_line: String,
        #[serde(default)]
        errors: Vec<String>,
        #[serde(default)]
        children: Vec<BuildNode>,
    },
    /// `"kind": "folder"`: a named container (message folders, property groups)
    /// whose children are still searched. Any other `kind` is rejected.
    Folder {
        #[serde(default)]
        name: String,
        #[serde(default)]
        children: Vec<BuildNode>,
    },
}

impl BuildNode {
    pub fn children(&self) -> &[BuildNode] {
        match self {
            BuildNode::Build { children }
            | BuildNode::Project { children, .. }
            | BuildNode::Target { children, .. }
            | BuildNode::Task { children, .. }
            | BuildNode::Folder { children, .. } => children,
        }
    }
}
