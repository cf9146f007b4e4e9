//! The `PathUtility` facade.
//!
//! Bundles an explicit [`PathContext`] with the [`GlobOptions`] in effect so
//! callers get the three path operations without threading both through
//! every call.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::path::directory;
use crate::path::glob::{self, GlobOptions};
use crate::path::relative;
use crate::path::types::PathContext;

/// Directory creation, glob expansion and relative paths against one context.
///
/// Holds only immutable data, so a single instance can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use projpath::PathUtility;
/// use std::path::{Path, PathBuf};
///
/// let dir = tempfile::tempdir().unwrap();
/// let util = PathUtility::new(dir.path()).unwrap();
///
/// util.create_directory(Path::new("Sources/App"), true).unwrap();
/// std::fs::write(dir.path().join("Sources/App/main.swift"), "").unwrap();
///
/// let found = util.glob(&dir.path().join("Sources"), "/App/*.swift").unwrap();
/// assert_eq!(found.len(), 1);
///
/// let rel = util.relative(&found[0], dir.path()).unwrap();
/// assert_eq!(rel, PathBuf::from("Sources/App/main.swift"));
/// ```
#[derive(Debug, Clone)]
pub struct PathUtility {
    context: PathContext,
    glob_options: GlobOptions,
}

impl PathUtility {
    /// Create a utility rooted at `base_dir` with default glob options.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` is not absolute.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_context(PathContext::new(base_dir)?))
    }

    /// Create a utility from an existing context with default glob options.
    #[must_use]
    pub fn with_context(context: PathContext) -> Self {
        Self {
            context,
            glob_options: GlobOptions::default(),
        }
    }

    /// Create a utility whose glob options come from a merged configuration.
    #[must_use]
    pub fn from_config(context: PathContext, config: &Config) -> Self {
        Self {
            context,
            glob_options: GlobOptions::from_config(config),
        }
    }

    /// Replace the glob options.
    #[must_use]
    pub fn with_glob_options(mut self, options: GlobOptions) -> Self {
        self.glob_options = options;
        self
    }

    /// The context relative inputs are resolved against.
    #[must_use]
    pub fn context(&self) -> &PathContext {
        &self.context
    }

    /// The glob options in effect.
    #[must_use]
    pub fn glob_options(&self) -> GlobOptions {
        self.glob_options
    }

    /// Create a directory, resolving a relative `path` against the context.
    ///
    /// # Errors
    ///
    /// Returns the operating system error unchanged; see
    /// [`directory::create_directory`].
    pub fn create_directory(&self, path: &Path, create_intermediates: bool) -> Result<()> {
        let target = self.context.absolute(path)?;
        directory::create_directory(&target, create_intermediates)
    }

    /// Expand `pattern` appended to `base`.
    ///
    /// `base` is used as given (it is not resolved against the context) since
    /// the two are concatenated as strings.
    ///
    /// # Errors
    ///
    /// See [`glob::glob`].
    pub fn glob(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        glob::glob(base, pattern, self.glob_options)
    }

    /// The path of `path` relative to `base`.
    ///
    /// # Errors
    ///
    /// See [`relative::relative`].
    pub fn relative(&self, path: &Path, base: &Path) -> Result<PathBuf> {
        relative::relative(path, base, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobConfig;
    use tempfile::TempDir;

    #[test]
    fn test_relative_inputs_use_context_for_mkdir() {
        let temp = TempDir::new().unwrap();
        let util = PathUtility::new(temp.path()).unwrap();

        util.create_directory(Path::new("a/b"), true).unwrap();
        assert!(temp.path().join("a").join("b").is_dir());

        let err = util.create_directory(Path::new("x/y"), false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_relative_rejects_non_absolute_base() {
        assert!(PathUtility::new("relative").is_err());
    }

    #[test]
    fn test_glob_uses_configured_options() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.h"), "").unwrap();
        std::fs::write(temp.path().join("a.m"), "").unwrap();

        let config = Config {
            glob: Some(GlobConfig {
                brace_expansion: Some(false),
                ..Default::default()
            }),
        };
        let context = PathContext::new(temp.path()).unwrap();
        let util = PathUtility::from_config(context, &config);
        assert!(util.glob(temp.path(), "/a.{h,m}").unwrap().is_empty());

        let util = util.with_glob_options(GlobOptions::default().with_brace_expansion(true));
        assert_eq!(util.glob(temp.path(), "/a.{h,m}").unwrap().len(), 2);
    }

    #[test]
    #[cfg(unix)]
    fn test_relative_through_facade() {
        let util = PathUtility::new("/work/project").unwrap();
        let rel = util
            .relative(Path::new("Sources/App"), Path::new("/work/project/Tests"))
            .unwrap();
        assert_eq!(rel, PathBuf::from("../Sources/App"));
    }

    #[test]
    fn test_utility_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathUtility>();
    }
}
