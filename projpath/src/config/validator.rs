//! Configuration validation.

use crate::config::schema::Config;
use crate::error::Result;
use crate::path::PLATFORM_BRACE_EXPANSION;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use projpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Every combination of the current fields is accepted. Enabling brace
    /// expansion on a platform whose native glob lacks it is honoured but
    /// logged, since patterns will then behave differently from the system
    /// `glob(3)`.
    ///
    /// # Errors
    ///
    /// Reserved for fields that can hold invalid values.
    #[allow(clippy::unnecessary_wraps)]
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(glob) = &config.glob {
            if glob.brace_expansion == Some(true) && !PLATFORM_BRACE_EXPANSION {
                log::warn!(
                    "glob.brace_expansion is enabled but the platform glob has no brace support"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobConfig;

    #[test]
    fn test_default_config_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_brace_override_accepted() {
        for brace in [Some(true), Some(false), None] {
            let config = Config {
                glob: Some(GlobConfig {
                    brace_expansion: brace,
                    ..Default::default()
                }),
            };
            assert!(ConfigValidator::validate(&config).is_ok());
        }
    }
}
