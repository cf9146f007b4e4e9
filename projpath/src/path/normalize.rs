//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Resolving relative paths against an explicit base directory
//! - Resolving `.` and `..` components lexically

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (~) in a string to the home directory.
///
/// Handles `~` and `~/rest`. Anything else, including `~user`, is returned
/// unchanged.
///
/// # Errors
///
/// Returns an error if the string starts with `~` or `~/` and the home
/// directory cannot be determined.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::expand_tilde_str;
///
/// let expanded = expand_tilde_str("~/Sources/*.swift").unwrap();
/// assert!(expanded.ends_with("/Sources/*.swift"));
/// assert!(!expanded.starts_with('~'));
///
/// assert_eq!(expand_tilde_str("~user/x").unwrap(), "~user/x");
/// assert_eq!(expand_tilde_str("/abs/*.txt").unwrap(), "/abs/*.txt");
/// ```
pub fn expand_tilde_str(s: &str) -> Result<String> {
    let rest = if s == "~" {
        ""
    } else if let Some(rest) = s.strip_prefix("~/").or_else(|| s.strip_prefix("~\\")) {
        rest
    } else {
        return Ok(s.to_string());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(s),
        reason: "Cannot determine home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::InvalidPath {
        path: home.clone(),
        reason: "Home directory contains invalid UTF-8".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home.to_string())
    } else {
        let sep = std::path::MAIN_SEPARATOR;
        Ok(format!("{}{sep}{rest}", home.trim_end_matches(['/', '\\'])))
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` directly below the root is dropped, as `/..` names `/`.
///
/// # Errors
///
/// Returns an error if a relative path has more leading `..` components than
/// it has names to cancel them.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// assert_eq!(resolve_components(Path::new("/a/../..")).unwrap(), PathBuf::from("/"));
/// assert!(resolve_components(Path::new("a/../..")).is_err());
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Relative path contains too many '..' components".to_string(),
                    });
                }
            },
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make `path` absolute against `base` and resolve `.`/`..`.
///
/// `base` is expected to be absolute; relative inputs are joined onto it.
///
/// # Errors
///
/// Returns an error if the result is not absolute or escapes the root.
///
/// # Examples
///
/// ```
/// use projpath::path::normalize::absolutize;
/// use std::path::Path;
///
/// let abs = absolutize(Path::new("../lib"), Path::new("/work/app")).unwrap();
/// assert_eq!(abs, Path::new("/work/lib"));
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    if !joined.is_absolute() {
        return Err(Error::InvalidPath {
            path: joined,
            reason: "Path must be absolute after resolution".to_string(),
        });
    }

    resolve_components(&joined)
}
