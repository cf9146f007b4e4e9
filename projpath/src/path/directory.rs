//! Directory creation.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Create the directory at `path`.
///
/// With `create_intermediates` every missing ancestor is created as well and
/// an existing directory at `path` is not an error. Without it the parent must
/// already exist and `path` must not.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) carrying the operating system error
/// unchanged: `NotFound` for a missing ancestor, `AlreadyExists` when the
/// target exists (or, with intermediates, exists as a non-directory),
/// `PermissionDenied`, and so on. Nothing is retried.
///
/// # Examples
///
/// ```
/// use projpath::path::create_directory;
///
/// let dir = tempfile::tempdir().unwrap();
/// let nested = dir.path().join("a/b/c");
///
/// assert!(create_directory(&nested, false).unwrap_err().is_not_found());
/// create_directory(&nested, true).unwrap();
/// assert!(nested.is_dir());
/// ```
pub fn create_directory(path: &Path, create_intermediates: bool) -> Result<()> {
    log::debug!(
        "creating directory {} (intermediates: {create_intermediates})",
        path.display()
    );

    if create_intermediates {
        fs::create_dir_all(path)?;
    } else {
        fs::create_dir(path)?;
    }
    Ok(())
}
