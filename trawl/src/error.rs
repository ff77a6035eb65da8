//! Error types for the trawl library.
//!
//! This module provides the error hierarchy for all operations in the
//! trawl library, using `thiserror` for ergonomic error handling.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a trawl error.
///
/// # Examples
///
/// ```
/// use trawl::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(8192)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the trawl library.
///
/// This enum encompasses all error conditions that can occur while
/// scanning streams, resolving paths, and walking directories.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token exceeded the scanner's chunk limit before any delimiter
    /// appeared.
    ///
    /// The offsets are absolute stream positions bounding the searched
    /// window, with `end_offset` exclusive. A caller can seek back to
    /// `start_offset` and retry with a larger limit.
    #[error("no delimiter within chunk limit (stream bytes {start_offset}..{end_offset})")]
    ChunkTooLarge {
        /// Absolute stream offset where the failed search window begins.
        start_offset: u64,
        /// Absolute stream offset just past the failed search window.
        end_offset: u64,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A directory entry has a file type this library does not classify.
    #[error("unknown entry kind: {}", path.display())]
    UnknownEntryKind {
        /// The entry whose kind could not be classified.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O error raised while accessing `path` to the matching
    /// path-aware variant, falling back to [`Error::Io`].
    pub(crate) fn from_path_io(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(error),
        }
    }
}
