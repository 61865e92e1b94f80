//! Typed linker arguments and their canonical flag syntax

use std::fmt;
use std::path::{Path, PathBuf};

/// One flag group of a linker invocation, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Launcher executable, text before the first quote on the first line.
    DotnetPathSection(String),
    /// The linker itself.
    ToolPathSection(PathBuf),
    /// `-a <path> [<mode>]`
    Root { assembly_path: PathBuf, mode: Option<String> },
    /// `-reference <path>`
    Reference(PathBuf),
    /// `-out <path>`
    Out(PathBuf),
    /// `-x <path>`
    Descriptor(PathBuf),
    /// `--link-attributes <path>`
    LinkAttributes(PathBuf),
    /// `-d <path>`
    SearchDirectory(PathBuf),
    /// Unrecognized group, tokens joined by single spaces.
    Unknown(String),
}

impl Argument {
    /// The flag that introduces this argument on the command line.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Argument::Root { .. } => Some("-a"),
            Argument::Reference(_) => Some("-reference"),
            Argument::Out(_) => Some("-out"),
            Argument::Descriptor(_) => Some("-x"),
            Argument::LinkAttributes(_) => Some("--link-attributes"),
            Argument::SearchDirectory(_) => Some("-d"),
            Argument::DotnetPathSection(_)
            | Argument::ToolPathSection(_)
            | Argument::Unknown(_) => None,
        }
    }

    /// Path operand of a path-bearing argument.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Argument::ToolPathSection(path)
            | Argument::Reference(path)
            | Argument::Out(path)
            | Argument::Descriptor(path)
            | Argument::LinkAttributes(path)
            | Argument::SearchDirectory(path) => Some(path),
            Argument::Root { assembly_path, .. } => Some(assembly_path),
            Argument::DotnetPathSection(_) | Argument::Unknown(_) => None,
        }
    }

    /// A fresh argument identical to `self` except for its path operand.
    ///
    /// Arguments without a path operand are returned unchanged.
    pub fn with_path(&self, path: impl Into<PathBuf>) -> Argument {
        let path = path.into();
        match self {
            Argument::ToolPathSection(_) => Argument::ToolPathSection(path),
            Argument::Root { mode, .. } => {
                Argument::Root { assembly_path: path, mode: mode.clone() }
            }
            Argument::Reference(_) => Argument::Reference(path),
            Argument::Out(_) => Argument::Out(path),
            Argument::Descriptor(_) => Argument::Descriptor(path),
            Argument::LinkAttributes(_) => Argument::LinkAttributes(path),
            Argument::SearchDirectory(_) => Argument::SearchDirectory(path),
            Argument::DotnetPathSection(_) | Argument::Unknown(_) => self.clone(),
        }
    }

    /// Whether the argument belongs in a response file. The launcher and tool
    /// sections only exist on the original command line.
    pub fn is_response_entry(&self) -> bool {
        !matches!(self, Argument::DotnetPathSection(_) | Argument::ToolPathSection(_))
    }
}

/// Render a path operand, quoting it when it contains a space so the tokenizer
/// reads it back as a single token.
fn render_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if text.contains(' ') {
        format!("\"{text}\"")
    } else {
        text.into_owned()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::DotnetPathSection(path) => write!(f, "{path}"),
            Argument::ToolPathSection(path) => write!(f, "{}", render_path(path)),
            // `None` and an empty mode render the same way: no trailing operand.
            Argument::Root { assembly_path, mode } => match mode.as_deref() {
                Some(mode) if !mode.is_empty() => {
                    write!(f, "-a {} {mode}", render_path(assembly_path))
                }
                _ => write!(f, "-a {}", render_path(assembly_path)),
            },
            Argument::Unknown(raw) => write!(f, "{raw}"),
            Argument::Reference(path)
            | Argument::Out(path)
            | Argument::Descriptor(path)
            | Argument::LinkAttributes(path)
            | Argument::SearchDirectory(path) => {
                let flag = self.flag().unwrap_or_default();
                write!(f, "{flag} {}", render_path(path))
            }
        }
    }
}
