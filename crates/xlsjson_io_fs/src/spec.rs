//! Filesystem error types for input validation and output writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region InputErrors

/// Input file rejected before any read attempt.
#[derive(Debug, Error)]
pub enum InputFileError {
    /// Path does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    /// Path exists but is a directory or special file.
    #[error("Input path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    /// File extension is outside the accepted set.
    #[error(
        "Unsupported file format {extension:?} for {}; expected one of: {accepted}",
        path.display()
    )]
    UnsupportedExtension {
        /// Rejected input path.
        path: PathBuf,
        /// Extension as found on the path (empty when missing).
        extension: String,
        /// Accepted extensions, comma separated.
        accepted: String,
    },
    /// An accepted extension could not be compiled into a matcher.
    #[error("Invalid extension pattern: {0}")]
    InvalidPattern(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteErrors

/// Output write failure.
#[derive(Debug, Error)]
pub enum WriteFileError {
    /// The process may not create or replace the target.
    #[error("Permission denied writing file: {}", path.display())]
    PermissionDenied {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Any other IO fault (missing device, full disk, parent is a file, ...).
    #[error("Failed to write file {}: {source}", path.display())]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl WriteFileError {
    /// Target path of the failed write.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PermissionDenied { path, .. } | Self::Io { path, .. } => path,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
