//! Scaffolding error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the project tree.
///
/// Every variant names the path that failed so an aborted run leaves the
/// destination inspectable.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A parent directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The target exists and overwriting was not requested
    #[error("refusing to overwrite existing file {0}")]
    Exists(PathBuf),

    /// A file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
