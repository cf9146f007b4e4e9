#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # projpath
//!
//! Filesystem path utilities for project generation.
//!
//! This library provides the filesystem layer a project generator builds
//! on: creating directories, expanding glob patterns below a base path, and
//! expressing one path relative to another.
//!
//! ## Core Types
//!
//! - [`PathUtility`]: the three operations bound to one [`PathContext`]
//! - [`PathContext`]: the explicit base directory for relative inputs
//! - [`GlobOptions`]: brace, tilde, case and directory-marking switches
//! - [`Config`] and [`ConfigBuilder`]: layered YAML/env configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use projpath::PathUtility;
//! use std::path::{Path, PathBuf};
//!
//! let util = PathUtility::new("/work/project").unwrap();
//!
//! let rel = util.relative(Path::new("/work/project/Sources/App"), Path::new("/work/project/Tests")).unwrap();
//! assert_eq!(rel, PathBuf::from("../Sources/App"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{GlobOptions, PathContext, PathUtility};
