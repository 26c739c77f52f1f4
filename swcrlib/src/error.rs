//! Error types for swcrlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a listing run.
///
/// Undecodable bytes are not represented here: they are replaced with
/// U+FFFD while reading and never escalate.
#[derive(Error, Debug)]
pub enum SwcrError {
    /// Input directory does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Input path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory could not be read during discovery
    #[error("failed to scan '{path}': {source}")]
    Discovery {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A symlink that survived filtering points nowhere readable
    #[error("failed to follow link '{path}': {source}")]
    Link {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A symlinked directory leads back into a directory being walked
    #[error("symlink loop: '{path}' points back to '{target}'")]
    SymlinkLoop { path: PathBuf, target: PathBuf },

    /// Failed to read a discovered file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output document could not be written
    #[error("failed to write document '{path}': {message}")]
    Sink { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
