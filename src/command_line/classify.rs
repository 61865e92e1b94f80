//! Groups tokens into flag groups and maps each group to an [`Argument`]

use super::argument::Argument;
use super::assembler::assemble;
use crate::error::InvocationError;
use crate::utils::resolve_path;
use std::path::{Path, PathBuf};

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Split a token stream into groups: a flag plus the operands that follow it, or a
/// single stray operand. Every token ends up in exactly one group.
pub fn group_tokens(tokens: &[String]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut open = false;

    for token in tokens {
        if is_flag(token) {
            groups.push(vec![token.clone()]);
            open = true;
        } else if let (true, Some(group)) = (open, groups.last_mut()) {
            group.push(token.clone());
        } else {
            groups.push(vec![token.clone()]);
        }
    }
    groups
}

/// Map one group to its typed arguments.
///
/// The flag alone picks the variant. Operands beyond the ones the flag takes are
/// kept as a trailing `Unknown` so nothing read from the log is dropped. A known
/// flag missing its path operand is `Unknown` as a whole.
pub fn classify_group(group: &[String], working_dir: &Path) -> Vec<Argument> {
    let Some(path) = group.get(1).map(|raw| resolve_path(raw, working_dir)) else {
        return vec![Argument::Unknown(group.join(" "))];
    };

    let (argument, consumed) = match group[0].as_str() {
        "-a" => {
            let mode = group.get(2).cloned();
            let consumed = if mode.is_some() { 3 } else { 2 };
            (Argument::Root { assembly_path: path, mode }, consumed)
        }
        "-reference" => (Argument::Reference(path), 2),
        "-out" => (Argument::Out(path), 2),
        "-x" => (Argument::Descriptor(path), 2),
        "--link-attributes" => (Argument::LinkAttributes(path), 2),
        "-d" => (Argument::SearchDirectory(path), 2),
        _ => return vec![Argument::Unknown(group.join(" "))],
    };

    let mut arguments = vec![argument];
    if group.len() > consumed {
        tracing::debug!(flag = %group[0], extra = group.len() - consumed, "extra operands kept");
        arguments.push(Argument::Unknown(group[consumed..].join(" ")));
    }
    arguments
}

pub fn classify(tokens: &[String], working_dir: &Path) -> Vec<Argument> {
    group_tokens(tokens).iter().flat_map(|group| classify_group(group, working_dir)).collect()
}

/// A parsed linker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub working_dir: PathBuf,
    /// Starts with the launcher and tool sections, followed by the flag groups in
    /// command-line order.
    pub arguments: Vec<Argument>,
}

impl Invocation {
    pub fn parse(command_line: &str, working_dir: &Path) -> Result<Self, InvocationError> {
        let assembled = assemble(command_line, working_dir)?;

        let mut arguments = Vec::with_capacity(assembled.tokens.len() + 2);
        arguments.push(Argument::DotnetPathSection(assembled.dotnet_path));
        arguments.push(Argument::ToolPathSection(assembled.tool_path));
        arguments.extend(classify(&assembled.tokens, working_dir));

        tracing::debug!(count = arguments.len(), "parsed linker invocation");
        Ok(Self { working_dir: working_dir.to_path_buf(), arguments })
    }

    pub fn dotnet_path(&self) -> &str {
        self.arguments
            .iter()
            .find_map(|arg| match arg {
                Argument::DotnetPathSection(path) => Some(path.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn tool_path(&self) -> Option<&Path> {
        self.arguments.iter().find_map(|arg| match arg {
            Argument::ToolPathSection(path) => Some(path.as_path()),
            _ => None,
        })
    }

    /// Arguments that go into a response file, in order.
    pub fn response_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|arg| arg.is_response_entry())
    }
}
