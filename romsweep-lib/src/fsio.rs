//! Filesystem access for the cleanup flow.
//!
//! Everything the cleaner does to disk goes through the [`Filesystem`] trait:
//! one listing of the ROM directory, one destination-directory creation, and
//! one rename per selected file. Keeping the trait this narrow lets the
//! planning and execution code run against an in-memory fake in unit tests
//! while release builds only ever see [`OsFilesystem`].

use std::fs;
use std::io;
use std::path::Path;

/// The cleaner's view of the filesystem.
pub trait Filesystem {
    /// Names of the non-directory entries in `dir`, sorted by name.
    ///
    /// Subdirectories never show up here; the cleaner works on one flat
    /// directory and does not recurse.
    fn read_file_names(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Create `dir` and any missing parents. An existing directory is fine.
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Move `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn read_file_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)?.flatten() {
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };
            if file_type.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("Skipping non-UTF-8 filename {raw:?}"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
