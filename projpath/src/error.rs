//! Error types for the projpath library.
//!
//! This module provides the error hierarchy for all path operations,
//! using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a projpath error.
///
/// # Examples
///
/// ```
/// use projpath::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("Sources"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the projpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error reported by the operating system.
    ///
    /// Directory creation propagates the OS error here unchanged, so
    /// [`std::io::Error::kind`] still tells `NotFound`, `AlreadyExists`
    /// and `PermissionDenied` apart.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The effective pattern (base path followed by the pattern).
        pattern: String,
        /// The reason the pattern is invalid.
        reason: String,
    },

    /// A relative path was requested between paths on different volumes.
    #[error(
        "cannot compute a relative path from {} to {}: they are on different volumes",
        base.display(),
        path.display()
    )]
    CrossVolume {
        /// The target path.
        path: PathBuf,
        /// The base path the result would be relative to.
        base: PathBuf,
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
    /// Returns the kind of the underlying OS error, if this is an I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use projpath::Error;
    /// use std::io;
    ///
    /// let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    /// ```
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            _ => None,
        }
    }

    /// Check whether this error means a path (or one of its ancestors) is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// Check whether this error means the target already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::AlreadyExists)
    }
}
