//! Configuration schema definitions.
//!
//! This module defines the configuration structure for projpath. Every field
//! is optional so that partial files can be layered on top of each other.

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use projpath::config::{Config, GlobConfig};
///
/// let config: Config = serde_yaml::from_str("glob:\n  brace_expansion: false\n").unwrap();
/// assert_eq!(
///     config.glob,
///     Some(GlobConfig {
///         brace_expansion: Some(false),
///         ..Default::default()
///     })
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob expansion settings.
    pub glob: Option<GlobConfig>,
}

/// Glob expansion settings.
///
/// Unset fields fall back to [`GlobOptions::default`](crate::path::GlobOptions).
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    /// Expand `{a,b}` groups (defaults to the platform capability).
    pub brace_expansion: Option<bool>,

    /// Append a trailing separator to matched directories.
    pub mark_directories: Option<bool>,

    /// Match file names case-sensitively.
    pub case_sensitive: Option<bool>,

    /// Expand a leading `~` to the home directory.
    pub tilde_expansion: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_glob_section() {
        let yaml = r"
glob:
  brace_expansion: true
  mark_directories: false
  case_sensitive: false
  tilde_expansion: false
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let glob = config.glob.unwrap();
        assert_eq!(glob.brace_expansion, Some(true));
        assert_eq!(glob.mark_directories, Some(false));
        assert_eq!(glob.case_sensitive, Some(false));
        assert_eq!(glob.tilde_expansion, Some(false));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("glob:\n  braces: true\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("ports:\n  min: 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            glob: Some(GlobConfig {
                case_sensitive: Some(false),
                ..Default::default()
            }),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
