//! Relative path computation.
//!
//! Both inputs are first made absolute against an explicit [`PathContext`],
//! then compared component by component. The result climbs out of the base
//! with one `..` per unshared base component and descends into the target.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::PathContext;

/// Compute the path of `path` relative to `base`.
///
/// Joining the result onto `base` (and resolving `..`) yields `path` again.
/// When both resolve to the same location the result is empty.
///
/// # Errors
///
/// Returns [`Error::CrossVolume`] when the two paths live on different
/// volumes (differing Windows prefixes). A `..` at the filesystem root is
/// dropped rather than treated as an error.
///
/// # Examples
///
/// ```
/// use projpath::path::{relative, PathContext};
/// use std::path::{Path, PathBuf};
///
/// let ctx = PathContext::new("/work").unwrap();
///
/// let rel = relative(Path::new("/x/y/z/w"), Path::new("/x/y"), &ctx).unwrap();
/// assert_eq!(rel, PathBuf::from("z/w"));
///
/// let rel = relative(Path::new("/c/d"), Path::new("/a/b"), &ctx).unwrap();
/// assert_eq!(rel, PathBuf::from("../../c/d"));
///
/// let rel = relative(Path::new("app/src"), Path::new("/work/lib"), &ctx).unwrap();
/// assert_eq!(rel, PathBuf::from("../app/src"));
/// ```
pub fn relative(path: &Path, base: &Path, context: &PathContext) -> Result<PathBuf> {
    let target = context.absolute(path)?;
    let base = context.absolute(base)?;

    if prefix_of(&target) != prefix_of(&base) {
        return Err(Error::CrossVolume { path: target, base });
    }

    let target_components: Vec<Component<'_>> = target.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let common = target_components
        .iter()
        .zip(&base_components)
        .take_while(|(t, b)| t == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base_components.len() {
        result.push(Component::ParentDir);
    }
    for component in &target_components[common..] {
        result.push(component);
    }

    log::debug!(
        "relative path of {} from {}: {}",
        target.display(),
        base.display(),
        result.display()
    );
    Ok(result)
}

fn prefix_of(path: &Path) -> Option<Component<'_>> {
    match path.components().next() {
        Some(c @ Component::Prefix(_)) => Some(c),
        _ => None,
    }
}
