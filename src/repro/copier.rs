//! Filesystem seam used by the materializer

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// The file operations the materializer needs. Swapped for an in-memory fake in
/// tests.
pub trait Copier {
    /// `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Something (file or directory) already occupies `path`.
    fn is_taken(&self, path: &Path) -> bool;

    fn copy_file(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Recursively copy the directory `from` to `to`, creating `to`.
    fn copy_dir(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Copies on the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl Copier for FsCopier {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_taken(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn copy_dir(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if !from.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Source directory not found: {}", from.display()),
            ));
        }

        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            let dest = to.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else {
                fs::copy(entry.path(), &dest)?;
            }
        }
        Ok(())
    }
}
