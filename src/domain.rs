//! Shared configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Task name the linker is logged under.
pub const DEFAULT_TASK_NAME: &str = "ILLink";

/// Tool configuration, merged from file, environment and command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the build-log task to reproduce.
    pub task_name: String,
    /// Repro directory, relative to the current directory unless absolute.
    pub output_dir: PathBuf,
    /// Subdirectory of the repro that receives copied inputs.
    pub input_dir: String,
    /// Response-file name inside the repro.
    pub response_file: String,
    /// Literal written in place of the original `-out` path.
    pub out_dir_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_name: DEFAULT_TASK_NAME.to_string(),
            output_dir: PathBuf::from("repro"),
            input_dir: "input".to_string(),
            response_file: "linker.rsp".to_string(),
            out_dir_name: "out".to_string(),
        }
    }
}

impl Config {
    pub fn layout(&self) -> ReproLayout {
        ReproLayout {
            input_dir: self.input_dir.clone(),
            response_file: self.response_file.clone(),
            out_dir_name: self.out_dir_name.clone(),
        }
    }
}

/// Names used inside a repro directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReproLayout {
    pub input_dir: String,
    pub response_file: String,
    pub out_dir_name: String,
}

impl Default for ReproLayout {
    fn default() -> Self {
        Config::default().layout()
    }
}
