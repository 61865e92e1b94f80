//! Joins a multi-line invocation into one token stream
//!
//! The first line carries the launcher and tool paths, e.g.
//! `/usr/bin/dotnet "/tools/illink.dll" -a ...`; everything after the tool path is
//! ordinary arguments. A quoted launcher (`"/usr/bin/dotnet" "/tools/illink" ...`)
//! is taken from the first token instead.

use super::tokenizer::split_line;
use crate::error::InvocationError;
use crate::utils::resolve_path;
use std::path::{Path, PathBuf};

/// Flat token stream plus the two paths pulled off the first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledLine {
    pub dotnet_path: String,
    pub tool_path: PathBuf,
    pub tokens: Vec<String>,
}

pub fn assemble(command_line: &str, working_dir: &Path) -> Result<AssembledLine, InvocationError> {
    let lines: Vec<&str> =
        command_line.split(['\n', '\r']).map(|line| line.trim_matches(['\n', '\r'])).collect();

    let first_index =
        lines.iter().position(|line| !line.trim().is_empty()).ok_or(InvocationError::Empty)?;
    let first = lines[first_index];

    let quote = first
        .find('"')
        .ok_or_else(|| InvocationError::MissingToolPath { line: first.to_string() })?;
    let mut dotnet_path = first[..quote].trim_matches(' ').to_string();

    let mut tokens = split_line(&first[quote..]);
    if dotnet_path.is_empty() && tokens.len() > 1 && !tokens[1].starts_with('-') {
        dotnet_path = tokens.remove(0);
    }
    if tokens.is_empty() {
        return Err(InvocationError::MissingToolPath { line: first.to_string() });
    }
    let tool_path = resolve_path(&tokens.remove(0), working_dir);

    for line in &lines[first_index + 1..] {
        tokens.extend(split_line(line));
    }

    Ok(AssembledLine { dotnet_path, tool_path, tokens })
}
