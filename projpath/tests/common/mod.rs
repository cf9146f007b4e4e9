//! Common test utilities for integration tests.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates files (and directories, for entries ending in `/`) under `root`.
#[allow(dead_code)]
pub fn create_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        let path = root.join(entry);
        if entry.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "").unwrap();
        }
    }
}

/// Strips `base` from each match so results can be compared as a set.
#[allow(dead_code)]
pub fn relative_names(found: &[PathBuf], base: &Path) -> HashSet<String> {
    found
        .iter()
        .map(|p| {
            p.strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
