//! Error type for report generation
//!
//! Only fatal conditions live here. Unreadable directories and entries that
//! cannot be inspected are handled inside the walkers and never surface as
//! an `Error`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
#[derive(Error, Debug)]
pub enum Error {
    /// The root path does not exist (or cannot be resolved).
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A report already exists and overwriting was refused.
    #[error("'{}' already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// The report file could not be written.
    #[error("error saving folder structure to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
