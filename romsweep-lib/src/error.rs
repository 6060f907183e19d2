use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a cleanup run.
///
/// All of these are fatal: the run stops at the first one, with no retry and
/// no rollback of files already moved. Malformed filenames are not errors at
/// this level; the scanner drops them before grouping.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The ROM directory could not be listed.
    #[error("cannot read rom directory {}: {source}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination directory could not be created.
    #[error("cannot create destination directory {}: {source}", .dir.display())]
    CreateDestDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A selected file could not be moved into the destination directory.
    #[error("cannot move {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The run report could not be written.
    #[error("cannot write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
