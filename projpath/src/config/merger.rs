//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GlobConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use projpath::config::{Config, ConfigMerger, GlobConfig};
///
/// let low = Config {
///     glob: Some(GlobConfig { brace_expansion: Some(true), ..Default::default() }),
/// };
/// let high = Config {
///     glob: Some(GlobConfig { brace_expansion: Some(false), ..Default::default() }),
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.glob.unwrap().brace_expansion, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Nested sections merge field by field; a field set in `source`
    /// replaces the one in `target`, an unset field leaves it alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(source_glob) = &source.glob {
            let target_glob = target.glob.get_or_insert_with(GlobConfig::default);
            Self::merge_glob(target_glob, source_glob);
        }
    }

    fn merge_glob(target: &mut GlobConfig, source: &GlobConfig) {
        if source.brace_expansion.is_some() {
            target.brace_expansion = source.brace_expansion;
        }

        if source.mark_directories.is_some() {
            target.mark_directories = source.mark_directories;
        }

        if source.case_sensitive.is_some() {
            target.case_sensitive = source.case_sensitive;
        }

        if source.tilde_expansion.is_some() {
            target.tilde_expansion = source.tilde_expansion;
        }
    }
}
