//! Drawing error types

use thiserror::Error;

/// Errors raised by write-performing drawing operations
#[derive(Error, Debug)]
pub enum DrawError {
    /// The backend's output sink could not be written
    #[error("draw output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for drawing operations
pub type Result<T> = std::result::Result<T, DrawError>;
