//! Configuration system for projpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PROJPATH_*`)
//! 3. Private project config (`projpath.local.yaml`)
//! 4. Project config (`projpath.yaml`)
//! 5. User config (`~/.projpath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use projpath::config::ConfigBuilder;
//! use projpath::path::{GlobOptions, PathContext, PathUtility};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/project");
//! let config = ConfigBuilder::new().with_working_dir(root).build().unwrap();
//!
//! let util = PathUtility::from_config(PathContext::new(root).unwrap(), &config);
//! assert_eq!(util.glob_options(), GlobOptions::from_config(&config));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GlobConfig};
pub use validator::ConfigValidator;
