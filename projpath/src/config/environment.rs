//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PROJPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, GlobConfig};
use crate::error::{Error, Result};
use std::env;

/// Environment variable overriding `glob.brace_expansion`.
pub const BRACE_EXPANSION_ENV: &str = "PROJPATH_BRACE_EXPANSION";
/// Environment variable overriding `glob.mark_directories`.
pub const MARK_DIRECTORIES_ENV: &str = "PROJPATH_MARK_DIRECTORIES";
/// Environment variable overriding `glob.case_sensitive`.
pub const CASE_SENSITIVE_ENV: &str = "PROJPATH_CASE_SENSITIVE";
/// Environment variable overriding `glob.tilde_expansion`.
pub const TILDE_EXPANSION_ENV: &str = "PROJPATH_TILDE_EXPANSION";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use projpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable holds an invalid boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(BRACE_EXPANSION_ENV) {
            Self::glob_section(config).brace_expansion =
                Some(Self::parse_bool(BRACE_EXPANSION_ENV, &val)?);
        }

        if let Ok(val) = env::var(MARK_DIRECTORIES_ENV) {
            Self::glob_section(config).mark_directories =
                Some(Self::parse_bool(MARK_DIRECTORIES_ENV, &val)?);
        }

        if let Ok(val) = env::var(CASE_SENSITIVE_ENV) {
            Self::glob_section(config).case_sensitive =
                Some(Self::parse_bool(CASE_SENSITIVE_ENV, &val)?);
        }

        if let Ok(val) = env::var(TILDE_EXPANSION_ENV) {
            Self::glob_section(config).tilde_expansion =
                Some(Self::parse_bool(TILDE_EXPANSION_ENV, &val)?);
        }

        Ok(())
    }

    fn glob_section(config: &mut Config) -> &mut GlobConfig {
        config.glob.get_or_insert_with(Default::default)
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
