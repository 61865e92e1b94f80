//! Path normalization

use std::path::{Component, Path, PathBuf};

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Lexically normalize a path: drop `.` components and fold `..` into the parent.
///
/// Never touches the filesystem, so it works for paths that only exist on the
/// machine that produced the build log.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
            Component::RootDir => out.push(Path::new("/")),
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
        }
    }
    out
}

/// Resolve a command-line path token into an absolute, normalized path.
///
/// Surrounding double quotes are stripped. Relative paths are joined onto
/// `working_dir`; if that is itself relative the process working directory is used
/// as the anchor.
pub fn resolve_path(raw: &str, working_dir: &Path) -> PathBuf {
    let candidate = Path::new(raw.trim_matches('"'));
    let joined =
        if candidate.is_absolute() { candidate.to_path_buf() } else { working_dir.join(candidate) };
    let absolute = if joined.is_absolute() {
        joined
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(&joined),
            Err(_) => joined,
        }
    };
    clean_path(&absolute)
}

/// Final component of `path` as an owned string, if it has one.
pub fn file_name_string(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_path_folds_parent_and_current_dir() {
        let cleaned = clean_path(Path::new("/obj/./Release/../net8.0/App.dll"));
        assert_eq!(cleaned, PathBuf::from("/obj/net8.0/App.dll"));
    }

    #[test]
    fn clean_path_does_not_climb_above_root() {
        assert_eq!(clean_path(Path::new("/../../x")), PathBuf::from("/x"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let resolved = resolve_path("\"/ref/Lib.dll\"", Path::new("/work"));
        assert_eq!(resolved, PathBuf::from("/ref/Lib.dll"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_path_joins_relative_paths_onto_working_dir() {
        let resolved = resolve_path("obj/../bin/App.dll", Path::new("/src/app"));
        assert_eq!(resolved, PathBuf::from("/src/app/bin/App.dll"));
    }

    #[test]
    fn normalize_path_uses_forward_slashes() {
        assert_eq!(normalize_path(r"input\App.dll"), "input/App.dll");
    }
}
