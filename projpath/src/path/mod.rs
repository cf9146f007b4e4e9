//! Filesystem path utilities.
//!
//! This module provides the three operations a project generator needs from
//! the filesystem layer:
//!
//! - [`create_directory`]: create a directory, optionally with its ancestors
//! - [`glob()`]: expand a shell-style pattern appended to a base path
//! - [`relative()`]: express one path relative to another
//!
//! # Key Concepts
//!
//! ## Explicit context
//!
//! Relative inputs are resolved against a [`PathContext`] supplied by the
//! caller rather than the process working directory.
//!
//! ## Glob syntax
//!
//! `*`, `?`, `[...]`, a leading `~`, and `{a,b}` when brace expansion is
//! enabled. See [`PLATFORM_BRACE_EXPANSION`] for the platform default.
//!
//! # Examples
//!
//! ```
//! use projpath::path::{relative, PathContext};
//! use std::path::{Path, PathBuf};
//!
//! let ctx = PathContext::new("/project").unwrap();
//! let rel = relative(Path::new("/project/Sources"), Path::new("/project/Tests"), &ctx).unwrap();
//! assert_eq!(rel, PathBuf::from("../Sources"));
//! ```

pub mod brace;
pub mod directory;
pub mod glob;
pub mod normalize;
pub mod relative;
mod types;
mod utility;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use directory::create_directory;
pub use self::glob::{glob, GlobOptions, PLATFORM_BRACE_EXPANSION};
pub use relative::relative;
pub use types::PathContext;
pub use utility::PathUtility;
