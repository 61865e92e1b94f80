//! Shared helpers

pub mod paths;

pub use paths::{clean_path, file_name_string, normalize_path, resolve_path};
