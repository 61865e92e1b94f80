//! Source path → input-relative destination bookkeeping

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Remembers where each absolute source path was copied to.
///
/// A source is copied at most once per run; later arguments naming the same path
/// reuse the first destination.
#[derive(Debug, Default)]
pub struct CopyRegistry {
    entries: HashMap<PathBuf, String>,
}

impl CopyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &Path) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn insert(&mut self, source: PathBuf, relative: String) {
        self.entries.insert(source, relative);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `Lib.dll` → `Lib.<index>.dll`; names without an extension get `.<index>` appended.
pub fn disambiguated_file_name(file_name: &str, index: usize) -> String {
    let path = Path::new(file_name);
    match (path.file_stem().and_then(|s| s.to_str()), path.extension().and_then(|e| e.to_str())) {
        (Some(stem), Some(ext)) => format!("{stem}.{index}.{ext}"),
        _ => disambiguated_dir_name(file_name, index),
    }
}

/// `refs` → `refs.<index>`
pub fn disambiguated_dir_name(dir_name: &str, index: usize) -> String {
    format!("{dir_name}.{index}")
}
