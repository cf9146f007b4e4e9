//! Core types for path handling.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;

/// The base directory relative inputs are resolved against.
///
/// This stands in for the process working directory so that no operation
/// reads ambient process state. A context is always absolute and free of
/// `.` and `..` components.
///
/// # Examples
///
/// ```
/// use projpath::path::PathContext;
/// use std::path::Path;
///
/// let ctx = PathContext::new("/work/app/../project").unwrap();
/// assert_eq!(ctx.base_dir(), Path::new("/work/project"));
/// assert_eq!(ctx.absolute(Path::new("src")).unwrap(), Path::new("/work/project/src"));
///
/// assert!(PathContext::new("relative/dir").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathContext {
    base_dir: PathBuf,
}

impl PathContext {
    /// Create a context rooted at `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` is not absolute.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_absolute() {
            return Err(Error::InvalidPath {
                path: base_dir,
                reason: "Base directory must be absolute".to_string(),
            });
        }
        let base_dir = normalize::resolve_components(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Capture the process working directory once.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: PathBuf::from("."),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        Self::new(cwd)
    }

    /// The absolute base directory of this context.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `path` to an absolute path with `.` and `..` removed.
    ///
    /// Absolute inputs ignore the base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined path is not absolute, which only
    /// happens for a Windows path with a prefix but no root.
    pub fn absolute(&self, path: &Path) -> Result<PathBuf> {
        normalize::absolutize(path, &self.base_dir)
    }
}
